use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tokio_util::sync::CancellationToken;

use jurnal_engine::{ExportFormat, TimestampFormat};
use jurnal_runtime::board::load_board;
use jurnal_runtime::dashboard::{admin_dashboard, teacher_dashboard};
use jurnal_runtime::{Client, Error, Listing, Method, Needs, Result, Session, ViewScope};
use jurnal_testing::MockGateway;
use jurnal_testing::fixtures::{guru, jadwal, jurnal, kelas, login, mapel, siswa};
use jurnal_types::{Gender, Hari, Jurnal};

fn journal_gateway() -> MockGateway {
    let mut journals: Vec<Jurnal> = (0..23)
        .map(|i| jurnal(&format!("j{:02}", i), "u1", "c1", "m1", (i % 8) + 1))
        .collect();
    journals.extend((0..7).map(|i| jurnal(&format!("k{:02}", i), "u2", "c2", "m2", i + 1)));

    MockGateway::new()
        .on_list("getjurnal", &journals)
        .on_list("getusers?role=guru", &[guru("u1", "Sari Wulandari"), guru("u2", "Andi Pratama")])
        .on_list("getkelas", &[kelas("c1", "7A", &["s1"]), kelas("c2", "8B", &[])])
        .on_list("getmapels", &[mapel("m1", "MTK", "Matematika"), mapel("m2", "IPA", "Ilmu Pengetahuan Alam")])
        .on_list("getstudents", &[siswa("s1", "Dewi", "c1", Gender::Perempuan)])
}

fn admin_client(gateway: Arc<MockGateway>) -> Client {
    Client::new(gateway, Session::anonymous())
}

#[tokio::test]
async fn test_board_waits_for_every_prerequisite() -> Result<()> {
    let gateway = Arc::new(journal_gateway());
    let client = admin_client(gateway.clone());
    let cancel = CancellationToken::new();

    let board = load_board(&client, client.list::<Jurnal>(), Needs::journals(), &cancel).await?;

    assert_eq!(board.items.len(), 30);
    assert!(board.warnings.is_empty());
    assert_eq!(board.labels.users.get("u1"), Some("Sari Wulandari"));
    assert_eq!(board.labels.kelas.get("c2"), Some("8B"));
    assert_eq!(board.labels.mapel.get("m1"), Some("Matematika"));
    assert_eq!(board.labels.siswa.get("s1"), Some("Dewi"));

    let mut paths = gateway.paths();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "GET getjurnal",
            "GET getkelas",
            "GET getmapels",
            "GET getstudents",
            "GET getusers?role=guru",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_prerequisite_failure_degrades_to_warning() -> Result<()> {
    let gateway = Arc::new(journal_gateway().fail(Method::Get, "getusers?role=guru", 500, None));
    let client = admin_client(gateway);

    let board = load_board(&client, client.list::<Jurnal>(), Needs::journals(), &CancellationToken::new()).await?;

    assert_eq!(board.items.len(), 30);
    assert!(board.prerequisites.users.is_empty());
    assert_eq!(board.warnings.len(), 1);
    assert_eq!(board.warnings[0].source, "users");
    Ok(())
}

#[tokio::test]
async fn test_primary_failure_fails_board() {
    let gateway = Arc::new(journal_gateway().unreachable(Method::Get, "getjurnal"));
    let client = admin_client(gateway);

    let result = load_board(&client, client.list::<Jurnal>(), Needs::journals(), &CancellationToken::new()).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_superseded_load_is_cancelled() {
    let gateway = Arc::new(journal_gateway().hang(Method::Get, "getjurnal"));
    let client = admin_client(gateway);
    let mut scope = ViewScope::new();
    let first = scope.token();

    let (result, _) = tokio::join!(
        load_board(&client, client.list::<Jurnal>(), Needs::journals(), &first),
        async {
            tokio::task::yield_now().await;
            scope.restart();
        }
    );

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(!scope.token().is_cancelled());
}

#[tokio::test]
async fn test_filtered_export_is_never_truncated_to_a_page() -> Result<()> {
    let gateway = Arc::new(journal_gateway());
    let client = admin_client(gateway);
    let board = load_board(&client, client.list::<Jurnal>(), Needs::journals(), &CancellationToken::new()).await?;

    let mut listing = Listing::from_board(board, TimestampFormat::default(), 10);
    listing.go(3);
    listing.set_filter(Some("u1"));

    assert_eq!(listing.page().items.len(), 10);
    assert_eq!(listing.visible().len(), 23);
    for format in ExportFormat::ALL {
        let artifact = listing.export(format)?;
        assert_eq!(artifact.row_count, 23);
        assert!(artifact.file_name.starts_with("jurnal_detail_filtered_u1."));
    }

    let labels: Vec<String> = listing.options().into_iter().map(|o| o.label).collect();
    assert_eq!(labels, vec!["Andi Pratama", "Sari Wulandari"]);
    Ok(())
}

#[tokio::test]
async fn test_teacher_dashboard_lists_today_in_period_order() -> Result<()> {
    let gateway = Arc::new(
        MockGateway::new()
            .on_list("getusers", &[guru("u1", "Sari Wulandari"), guru("u2", "Andi Pratama")])
            .on_list("getjurnalbyguru/u1", &[jurnal("j1", "u1", "c1", "m1", 1)])
            .on_list(
                "getjadwalbyguru/u1",
                &[
                    jadwal("d1", "c1", Hari::Senin, 5, Some("m1")),
                    jadwal("d2", "c1", Hari::Senin, 2, None),
                    jadwal("d3", "c1", Hari::Rabu, 1, Some("m1")),
                ],
            )
            .on_list("getkelas", &[kelas("c1", "7A", &[])])
            .on_list("getmapels", &[mapel("m1", "MTK", "Matematika")]),
    );
    let client = Client::new(gateway, Session::signed_in(login("tok", guru("u1", "Sari Wulandari"))));
    // Monday 18 August 2025, 08:00 in Jakarta
    let now = Utc.with_ymd_and_hms(2025, 8, 18, 1, 0, 0).unwrap();

    let dashboard = teacher_dashboard(&client, now, TimestampFormat::default(), &CancellationToken::new()).await?;

    assert_eq!(dashboard.teacher, "Sari Wulandari");
    assert_eq!(dashboard.jurnal_count, 1);
    assert_eq!(dashboard.jadwal_count, 3);
    assert_eq!(dashboard.user_count, 2);
    assert_eq!(dashboard.today, Some(Hari::Senin));
    let periods: Vec<u32> = dashboard.today_schedule.iter().map(|s| s.jam_ke).collect();
    assert_eq!(periods, vec![2, 5]);
    assert_eq!(dashboard.today_schedule[1].mapel, "Matematika");
    Ok(())
}

#[tokio::test]
async fn test_teacher_dashboard_requires_signed_in_user() {
    let gateway = Arc::new(MockGateway::new());
    let client = Client::new(gateway.clone(), Session::anonymous());
    let now = Utc.with_ymd_and_hms(2025, 8, 18, 1, 0, 0).unwrap();

    let result = teacher_dashboard(&client, now, TimestampFormat::default(), &CancellationToken::new()).await;
    assert!(matches!(result, Err(Error::MissingCredential)));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_admin_dashboard_counts() -> Result<()> {
    let gateway = Arc::new(
        MockGateway::new()
            .on_list("getusers", &[guru("u1", "Sari Wulandari")])
            .on_list("getkelas", &[kelas("c1", "7A", &[]), kelas("c2", "7B", &[])])
            .on_list("getmapels", &[mapel("m1", "MTK", "Matematika")])
            .fail(Method::Get, "getstudents", 503, Some("Sedang pemeliharaan")),
    );
    let client = admin_client(gateway);

    let dashboard = admin_dashboard(&client, &CancellationToken::new()).await?;
    assert_eq!(dashboard.user_count, 1);
    assert_eq!(dashboard.kelas_count, 2);
    assert_eq!(dashboard.siswa_count, 0);
    assert_eq!(dashboard.warnings[0].message, "Sedang pemeliharaan");
    Ok(())
}
