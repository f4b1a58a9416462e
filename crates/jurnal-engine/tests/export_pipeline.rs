use chrono::{TimeZone, Utc};
use jurnal_engine::{
    ExportFormat, LabelIndex, LabelIndices, PageCursor, Record, RenderContext, TimestampFormat,
    export, filter_and_sort, filter_options, paginate,
};
use jurnal_types::{Jurnal, Mapel, Ref, Siswa, User};

fn labels() -> LabelIndices {
    let mut users = LabelIndex::new();
    users.insert("u1", "Bu Sari");
    users.insert("u2", "Pak Andi");
    let mut kelas = LabelIndex::new();
    kelas.insert("c1", "7A");
    kelas.insert("c2", "8B");
    let mut siswa = LabelIndex::new();
    siswa.insert("s1", "Ani");
    LabelIndices {
        users,
        kelas,
        siswa,
        ..Default::default()
    }
}

fn jurnal(n: usize, guru: &str) -> Jurnal {
    Jurnal {
        id: format!("j{}", n),
        guru: Some(Ref::bare(guru)),
        kelas: Some(Ref::bare(if n % 2 == 0 { "c1" } else { "c2" })),
        mapel: Some(Ref::Expanded(Mapel {
            id: "m1".into(),
            nama_mapel: Some("IPA".into()),
            ..Default::default()
        })),
        jam_pelajaran: (n % 8) as u32 + 1,
        materi: Some(format!("Materi {}", n)),
        catatan: None,
        siswa_tidak_hadir: vec![],
        siswa_izin: vec![],
        siswa_sakit: vec![],
        created_at: None,
        updated_at: None,
    }
}

/// 23 entries for u1 interleaved with 7 for u2.
fn journals() -> Vec<Jurnal> {
    (0..30)
        .map(|n| jurnal(n, if n % 4 == 3 && n < 28 { "u2" } else { "u1" }))
        .collect()
}

#[test]
fn test_filtered_export_is_never_truncated_to_one_page() {
    let labels = labels();
    let ctx = RenderContext::new(&labels, TimestampFormat::default());
    let all = journals();

    let filtered = filter_and_sort(&all, Jurnal::filter_key(), Some("u1"), &Jurnal::default_sort(&ctx));
    assert_eq!(filtered.len(), 23);
    assert_eq!(paginate(&filtered, 1, 10).items.len(), 10);

    for format in ExportFormat::ALL {
        let artifact = export(&filtered, format, &ctx, Some("u1")).unwrap();
        assert_eq!(artifact.row_count, filtered.len(), "{}", format);
        assert!(artifact.file_name.starts_with("jurnal_detail_filtered_u1."));
    }

    let sheet = export(&filtered, ExportFormat::Sheet, &ctx, Some("u1")).unwrap();
    let mut reader = csv::Reader::from_reader(&sheet.bytes[3..]);
    assert_eq!(reader.records().count(), 23);
}

#[test]
fn test_narrowing_filter_pulls_page_back_into_range() {
    let labels = labels();
    let ctx = RenderContext::new(&labels, TimestampFormat::default());
    let all = journals();
    let sort = Jurnal::default_sort(&ctx);

    let mut cursor = PageCursor::new(10);
    cursor.sync_total(all.len());
    cursor.go(3);
    assert_eq!(cursor.slice(&all).items.len(), 10);

    let only_u2 = filter_and_sort(&all, Jurnal::filter_key(), Some("u2"), &sort);
    cursor.sync_total(only_u2.len());
    assert_eq!(cursor.page(), 1);
    assert_eq!(cursor.slice(&only_u2).items.len(), 7);
}

#[test]
fn test_teacher_dropdown_comes_from_unfiltered_collection() {
    let labels = labels();
    let mut all = journals();
    all.push(Jurnal {
        guru: Some(Ref::Expanded(User {
            id: "u3".into(),
            email: Some("citra@sekolah.id".into()),
            ..Default::default()
        })),
        ..jurnal(99, "u3")
    });

    let options = filter_options(&all, Jurnal::filter_key().unwrap(), Some(&labels.users));
    let shown: Vec<(&str, &str)> = options
        .iter()
        .map(|o| (o.id.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(
        shown,
        vec![("u1", "Bu Sari"), ("u3", "citra@sekolah.id"), ("u2", "Pak Andi")]
    );
}

#[test]
fn test_sheet_matches_on_screen_labels() {
    let labels = labels();
    let ctx = RenderContext::new(&labels, TimestampFormat::default());
    let at = Utc.with_ymd_and_hms(2025, 8, 17, 7, 30, 0).unwrap();
    let items = vec![
        Jurnal {
            siswa_tidak_hadir: vec![
                Ref::bare("s1"),
                Ref::Expanded(Siswa {
                    id: "s2".into(),
                    nama: Some("Budi".into()),
                    ..Default::default()
                }),
            ],
            created_at: Some(at),
            ..jurnal(0, "u1")
        },
        Jurnal {
            catatan: Some("Remedial \"kuis\"".into()),
            siswa_sakit: vec![Ref::bare("s7")],
            ..jurnal(1, "u2")
        },
    ];

    let sheet = export(&items, ExportFormat::Sheet, &ctx, None).unwrap();
    assert_eq!(sheet.file_name, "jurnal_detail.csv");
    let csv = String::from_utf8(sheet.bytes[3..].to_vec()).unwrap();
    insta::assert_snapshot!("jurnal_sheet", csv);
}
