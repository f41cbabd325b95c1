use fake::Fake;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::lorem::en::{Paragraph, Words};
use fake::faker::name::en::Name;

use crate::ui::limits::{
    DESCRIPTION_MAX_CHARS, NAME_MIN_CHARS, PASSWORD_MIN_CHARS, TITLE_MAX_CHARS,
};

const PASSWORD_MAX_CHARS: usize = 20;
const TITLE_WORDS: std::ops::Range<usize> = 3..4;
const DESCRIPTION_SENTENCES: std::ops::Range<usize> = 2..5;
const FALLBACK_NAME: &str = "Test Reader";

/// Syntactically valid email made unique with a random tag in the local part.
pub(crate) fn email() -> String {
    let base: String = SafeEmail().fake();
    let tag = uuid::Uuid::new_v4().simple().to_string();
    let tag = tag.get(..12).unwrap_or(&tag);
    match base.split_once('@') {
        Some((local, domain)) => format!("{local}.{tag}@{domain}"),
        None => format!("reader.{tag}@example.com"),
    }
}

pub(crate) fn password() -> String {
    Password(PASSWORD_MIN_CHARS..PASSWORD_MAX_CHARS + 1).fake()
}

pub(crate) fn full_name() -> String {
    let name: String = Name().fake();
    if name.chars().count() >= NAME_MIN_CHARS {
        name
    } else {
        FALLBACK_NAME.to_string()
    }
}

pub(crate) fn title() -> String {
    let words: Vec<String> = Words(TITLE_WORDS).fake();
    clamp_chars(&words.join(" "), TITLE_MAX_CHARS)
}

pub(crate) fn paragraph() -> String {
    let paragraph: String = Paragraph(DESCRIPTION_SENTENCES).fake();
    clamp_chars(paragraph.trim(), DESCRIPTION_MAX_CHARS)
}

fn clamp_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
