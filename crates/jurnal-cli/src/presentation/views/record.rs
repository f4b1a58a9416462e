use std::fmt;

use crate::presentation::view_models::{DetailViewModel, MutationViewModel};

pub struct DetailView<'a> {
    data: &'a DetailViewModel,
}

impl<'a> DetailView<'a> {
    pub fn new(data: &'a DetailViewModel) -> Self {
        Self { data }
    }

    fn render_members(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let members = &self.data.members;
        let id_width = members.iter().map(|m| m.id.chars().count()).max().unwrap_or(0);
        let name_width = members.iter().map(|m| m.nama.chars().count()).max().unwrap_or(0);

        writeln!(f)?;
        writeln!(f, "Siswa ({})", members.len())?;
        for (i, member) in members.iter().enumerate() {
            writeln!(
                f,
                "  {:>2}. {:<id_width$}  {:<name_width$}  {}",
                i + 1,
                member.id,
                member.nama,
                member.jenis_kelamin,
                id_width = id_width,
                name_width = name_width
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .data
            .fields
            .iter()
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(2);

        writeln!(f, "{}", self.data.title)?;
        writeln!(f, "{}", "-".repeat(self.data.title.chars().count()))?;
        writeln!(f, "{:<width$}  {}", "ID", self.data.id, width = width)?;
        for field in &self.data.fields {
            let mut lines = field.value.lines();
            let first = lines.next().unwrap_or_default();
            writeln!(f, "{:<width$}  {}", field.label, first, width = width)?;
            for rest in lines {
                writeln!(f, "{:<width$}  {}", "", rest, width = width)?;
            }
        }

        if !self.data.members.is_empty() {
            self.render_members(f)?;
        }
        Ok(())
    }
}

pub struct MutationView<'a> {
    data: &'a MutationViewModel,
}

impl<'a> MutationView<'a> {
    pub fn new(data: &'a MutationViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MutationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.id {
            Some(id) => writeln!(f, "{} {} {}", self.data.entity, id, self.data.action),
            None => writeln!(f, "{} {}", self.data.entity, self.data.action),
        }
    }
}
