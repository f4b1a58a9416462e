//! Self-contained PDF 1.4 writer for the detail projection.
//!
//! Each record starts a new A4 page with its title and a Field/Value grid.
//! Text uses the base-14 Helvetica faces with WinAnsi encoding, so no font
//! needs embedding. A record longer than one page continues on the next.

use super::DetailBlock;

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 40.0;
const LABEL_COL: f32 = 140.0;
const PAD: f32 = 4.0;
const BODY_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 14.0;
const LINE_H: f32 = 12.0;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

pub(super) fn render(blocks: &[DetailBlock]) -> Vec<u8> {
    let mut layout = Layout::default();
    for block in blocks {
        layout.block(block);
    }
    assemble(&layout.finish())
}

#[derive(Default)]
struct Layout {
    pages: Vec<String>,
    current: Option<String>,
    y: f32,
}

impl Layout {
    fn new_page(&mut self) {
        if let Some(done) = self.current.take() {
            self.pages.push(done);
        }
        self.current = Some(String::new());
        self.y = PAGE_H - MARGIN;
    }

    fn ops(&mut self) -> &mut String {
        self.current.get_or_insert_with(String::new)
    }

    fn text(&mut self, x: f32, y: f32, font: &str, size: f32, text: &str) {
        let line = format!(
            "BT /{} {} Tf {:.2} {:.2} Td ({}) Tj ET\n",
            font,
            size,
            x,
            y,
            encode(text)
        );
        self.ops().push_str(&line);
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let line = format!("{:.2} {:.2} {:.2} {:.2} re S\n", x, y, w, h);
        self.ops().push_str(&line);
    }

    fn heading(&mut self, title: &str) {
        self.y -= TITLE_SIZE;
        self.text(MARGIN, self.y, BOLD, TITLE_SIZE, title);
        self.y -= TITLE_SIZE;
        self.row(&["Field".to_string()], &["Value".to_string()], true);
    }

    fn block(&mut self, block: &DetailBlock) {
        self.new_page();
        self.heading(&block.title);

        let value_width = PAGE_W - 2.0 * MARGIN - LABEL_COL;
        for field in &block.fields {
            let mut label = Some(wrap(field.label, LABEL_COL - 2.0 * PAD, BODY_SIZE));
            let mut value = wrap(&field.value, value_width - 2.0 * PAD, BODY_SIZE);

            while !value.is_empty() {
                let fit = ((self.y - MARGIN - 2.0 * PAD) / LINE_H).floor() as usize;
                if fit == 0 {
                    self.new_page();
                    self.heading(&format!("{} (lanjutan)", block.title));
                    continue;
                }
                let chunk: Vec<String> = value.drain(..fit.min(value.len())).collect();
                let mut left = label.take().unwrap_or_default();
                left.truncate(fit);
                self.row(&left, &chunk, false);
            }
        }
    }

    /// Draws one grid row and moves the cursor below it.
    fn row(&mut self, left: &[String], right: &[String], bold: bool) {
        let lines = left.len().max(right.len()).max(1);
        let height = lines as f32 * LINE_H + 2.0 * PAD;
        let top = self.y;
        let bottom = top - height;
        let value_width = PAGE_W - 2.0 * MARGIN - LABEL_COL;

        self.rect(MARGIN, bottom, LABEL_COL, height);
        self.rect(MARGIN + LABEL_COL, bottom, value_width, height);

        let font_left = BOLD;
        let font_right = if bold { BOLD } else { REGULAR };
        for (i, line) in left.iter().enumerate() {
            let baseline = top - PAD - (i as f32 + 1.0) * LINE_H + 2.0;
            self.text(MARGIN + PAD, baseline, font_left, BODY_SIZE, line);
        }
        for (i, line) in right.iter().enumerate() {
            let baseline = top - PAD - (i as f32 + 1.0) * LINE_H + 2.0;
            self.text(MARGIN + LABEL_COL + PAD, baseline, font_right, BODY_SIZE, line);
        }
        self.y = bottom;
    }

    fn finish(mut self) -> Vec<String> {
        if let Some(done) = self.current.take() {
            self.pages.push(done);
        }
        if self.pages.is_empty() {
            self.pages.push(String::new());
        }
        self.pages
    }
}

/// Word wrap using Helvetica's average glyph width.
fn wrap(text: &str, width: f32, size: f32) -> Vec<String> {
    let max_chars = ((width / (size * 0.5)).floor() as usize).max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let word: String = word.into_iter().collect();
            let needed = line.chars().count() + usize::from(!line.is_empty()) + word.chars().count();
            if needed > max_chars && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }

    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Escapes `text` as the body of a PDF literal string in WinAnsiEncoding.
fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => match win_ansi(c) {
                Some(byte) => out.push_str(&format!("\\{:03o}", byte)),
                None => out.push('?'),
            },
        }
    }
    out
}

fn win_ansi(c: char) -> Option<u8> {
    let byte = match c {
        '\u{20AC}' => 0x80,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
        _ => return None,
    };
    Some(byte)
}

fn assemble(pages: &[String]) -> Vec<u8> {
    const FIRST_PAGE_OBJ: usize = 5;

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", FIRST_PAGE_OBJ + 2 * i))
        .collect();

    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, content) in pages.iter().enumerate() {
        let content_obj = FIRST_PAGE_OBJ + 2 * i + 1;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /{} 3 0 R /{} 4 0 R >> >> /Contents {} 0 R >>",
            PAGE_W, PAGE_H, REGULAR, BOLD, content_obj
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ));
    }

    let mut out: Vec<u8> = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref = out.len();
    let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        table.push_str(&format!("{:010} 00000 n \n", offset));
    }
    table.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref
    ));
    out.extend_from_slice(table.as_bytes());
    out
}
