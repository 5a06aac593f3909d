use crate::utils::errors::PersistError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

// A4 in points
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 42;
const FONT_SIZE: i64 = 10;
const LEADING: i64 = 14;

pub const MAX_COLUMNS: usize = 85;
pub const LINES_PER_PAGE: usize = 54;

// WinAnsiEncoding code points 0x80..=0x9F; the rest of the encoding matches Latin-1
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('•', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// Byte for `c` in WinAnsiEncoding, if the font can show it.
fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u32 as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, byte)| *byte),
    }
}

fn to_win_ansi(line: &str) -> String {
    line.chars()
        .map(|c| if win_ansi_byte(c).is_some() { c } else { '?' })
        .collect()
}

/// Greedy word wrap; words longer than a line are split hard.
fn wrap_line(line: &str) -> Vec<String> {
    let mut rest: Vec<char> = line.trim_end().chars().collect();
    let mut wrapped = Vec::new();

    while rest.len() > MAX_COLUMNS {
        let cut = rest[..=MAX_COLUMNS]
            .iter()
            .rposition(|c| *c == ' ')
            .filter(|&p| p > 0);
        let (end, next) = match cut {
            Some(p) => (p, p + 1),
            None => (MAX_COLUMNS, MAX_COLUMNS),
        };
        wrapped.push(rest[..end].iter().collect::<String>().trim_end().to_string());

        let skip = rest[next..].iter().take_while(|c| **c == ' ').count();
        rest = rest[next + skip..].to_vec();
    }
    wrapped.push(rest.into_iter().collect());
    wrapped
}

/// Splits the report into pages of at most `LINES_PER_PAGE` lines of `MAX_COLUMNS` columns.
pub fn paginate(report: &str) -> Vec<Vec<String>> {
    let cleaned = to_win_ansi(&report.replace("**", ""));
    let lines: Vec<String> = cleaned.lines().flat_map(wrap_line).collect();

    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines
        .chunks(LINES_PER_PAGE)
        .map(|chunk| chunk.to_vec())
        .collect()
}

fn page_content(lines: &[String]) -> Result<Vec<u8>, PersistError> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), Object::Integer(FONT_SIZE)]),
        Operation::new("TL", vec![Object::Integer(LEADING)]),
        Operation::new(
            "Td",
            vec![
                Object::Integer(MARGIN),
                Object::Integer(PAGE_HEIGHT - MARGIN - FONT_SIZE),
            ],
        ),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("T*", vec![]));
        }
        let bytes: Vec<u8> = line.chars().filter_map(win_ansi_byte).collect();
        operations.push(Operation::new("Tj", vec![Object::string_literal(bytes)]));
    }
    operations.push(Operation::new("ET", vec![]));

    Content { operations }
        .encode()
        .map_err(|e| PersistError::Pdf(e.to_string()))
}

/// Lays the report out in Courier on A4 pages and returns the PDF bytes.
pub fn render_report_pdf(report: &str) -> Result<Vec<u8>, PersistError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in paginate(report) {
        let content_id = doc.add_object(Stream::new(dictionary! {}, page_content(&lines)?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PersistError::Pdf(e.to_string()))?;
    Ok(bytes)
}
