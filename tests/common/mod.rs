// Fixture builders shared by the integration tests
#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::fs;
use std::path::{Path, PathBuf};

/// Two-page export: a regular team with club players on page one, an elite
/// team and a regular team sharing a player on page two.
pub const ROSTER_PAGES: &[&[&str]] = &[
    &[
        "Oregon State University",
        "1/15/25, 3:04 PM",
        "Winter Soccer Tournament -> Open",
        "Lions FCRosters",
        "Name Gender Status Joined",
        "C-John Smith Male Active",
        "Jane Doe (Nomad) Female Active",
        "Bo Park Male Active",
        "https://www.imleagues.com/spa/roster",
    ],
    &[
        "Winter Soccer Tournament -> Elite",
        "Kickers Rosters",
        "Name Gender Status Joined",
        "Ava Reyes Female Active",
        "Winter Soccer Tournament -> Open",
        "Tigers Rosters",
        "Name Gender Status Joined",
        "Ava Reyes Female Active",
        "Sam Kim Male Active",
    ],
];

pub const CLUB_ROWS: &[(&str, &str)] = &[
    ("Smith, John", "OK"),
    ("Doe, Jane", "OK"),
    ("Kim, Sam", "Pending"),
];

/// Single-font PDF with one text object per line, so lopdf reports each
/// line on its own
pub fn write_roster_pdf(path: &Path, pages: &[&[&str]]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new("Td", vec![40.into(), (800 - 14 * i as i64).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Club export with the three metadata rows the real one carries
pub fn write_club_csv(path: &Path, rows: &[(&str, &str)]) {
    let mut out = String::from("Club Roster Report\nExported 01/10/2025\nWomen's Soccer Club\nPerson,Status,Email\n");
    for (person, status) in rows {
        out.push_str(&format!("\"{}\",{},x@example.edu\n", person, status));
    }
    fs::write(path, out).unwrap();
}

/// Config that only uses the pure-Rust engine, so tests don't need poppler
pub fn write_config(dir: &Path, strategies: &[&str], pdftotext_bin: &str) -> PathBuf {
    let list = strategies
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ");
    let path = dir.join("config.toml");
    fs::write(
        &path,
        format!("[extraction]\nstrategies = [{}]\npdftotext_bin = \"{}\"\n", list, pdftotext_bin),
    )
    .unwrap();
    path
}

pub fn lopdf_only_config(dir: &Path) -> PathBuf {
    write_config(dir, &["lopdf"], "pdftotext")
}
