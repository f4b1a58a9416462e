use std::fmt;

use jurnal_runtime::{AdminDashboard, TeacherDashboard};

use crate::presentation::view_models::DashboardViewModel;

pub struct DashboardView<'a> {
    data: &'a DashboardViewModel,
}

impl<'a> DashboardView<'a> {
    pub fn new(data: &'a DashboardViewModel) -> Self {
        Self { data }
    }

    fn render_admin(&self, f: &mut fmt::Formatter, data: &AdminDashboard) -> fmt::Result {
        writeln!(f, "Admin dashboard")?;
        writeln!(f)?;
        writeln!(f, "  {:<10} {}", "Users", data.user_count)?;
        writeln!(f, "  {:<10} {}", "Kelas", data.kelas_count)?;
        writeln!(f, "  {:<10} {}", "Mapel", data.mapel_count)?;
        writeln!(f, "  {:<10} {}", "Siswa", data.siswa_count)?;
        Ok(())
    }

    fn render_teacher(&self, f: &mut fmt::Formatter, data: &TeacherDashboard) -> fmt::Result {
        writeln!(f, "Selamat datang, {}", data.teacher)?;
        writeln!(f)?;
        writeln!(f, "  {:<10} {}", "Jurnal", data.jurnal_count)?;
        writeln!(f, "  {:<10} {}", "Jadwal", data.jadwal_count)?;
        writeln!(f, "  {:<10} {}", "Users", data.user_count)?;
        writeln!(f)?;

        let Some(today) = data.today else {
            return writeln!(f, "No classes on Sunday.");
        };
        if data.today_schedule.is_empty() {
            return writeln!(f, "No classes scheduled for {}.", today);
        }
        writeln!(f, "Jadwal {}:", today)?;
        for slot in &data.today_schedule {
            writeln!(f, "  Jam ke-{:<3} {:<12} {}", slot.jam_ke, slot.kelas, slot.mapel)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data {
            DashboardViewModel::Admin(data) => self.render_admin(f, data),
            DashboardViewModel::Guru(data) => self.render_teacher(f, data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jurnal_runtime::ScheduleSlot;
    use jurnal_types::Hari;

    #[test]
    fn test_teacher_schedule_lists_periods_in_order() {
        let data = DashboardViewModel::Guru(TeacherDashboard {
            teacher: "Sari Wulandari".into(),
            jurnal_count: 3,
            jadwal_count: 2,
            user_count: 4,
            today: Some(Hari::Senin),
            today_schedule: vec![ScheduleSlot {
                jam_ke: 2,
                hari: Hari::Senin,
                kelas: "7A".into(),
                mapel: "Matematika".into(),
            }],
            warnings: vec![],
        });
        let text = DashboardView::new(&data).to_string();
        assert!(text.starts_with("Selamat datang, Sari Wulandari\n"));
        assert!(text.contains("Jadwal Senin:\n  Jam ke-2   7A           Matematika\n"));
    }

    #[test]
    fn test_sunday_has_no_schedule() {
        let data = DashboardViewModel::Guru(TeacherDashboard {
            teacher: "Sari".into(),
            jurnal_count: 0,
            jadwal_count: 0,
            user_count: 0,
            today: None,
            today_schedule: vec![],
            warnings: vec![],
        });
        assert!(DashboardView::new(&data).to_string().ends_with("No classes on Sunday.\n"));
    }
}
