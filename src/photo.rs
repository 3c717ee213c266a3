//! Photo records as supplied by the folder lister.

use crate::types::PhotoId;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// One image file in a project folder.
///
/// Photos are never mutated after construction. Promoting a photo to cover
/// reorders the list it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ListedPhoto")]
pub struct Photo {
    pub id: PhotoId,
    pub raw_name: String,
    pub name: String,
    #[serde(skip)]
    key: String,
}

impl Photo {
    pub fn new(id: impl Into<PhotoId>, raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let name = strip_extension(&raw_name).to_string();
        let key = match_key(&name);
        Self {
            id: id.into(),
            raw_name,
            name,
            key,
        }
    }

    /// Case-folded, NFC-normalized name used by every filename heuristic.
    pub fn match_key(&self) -> &str {
        &self.key
    }

    /// Alphanumeric runs of the match key, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        tokenize(self.match_key())
    }
}

/// Wire shape of a folder listing entry. Listers send `{id, name}` with the
/// extension still on `name`; serialized photos carry `rawName` as well.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedPhoto {
    id: PhotoId,
    #[serde(default)]
    raw_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl From<ListedPhoto> for Photo {
    fn from(listed: ListedPhoto) -> Self {
        let raw_name = listed.raw_name.or(listed.name).unwrap_or_default();
        Photo::new(listed.id, raw_name)
    }
}

/// Strip the last dot-extension: a final `.` followed by one or more
/// characters that are neither `/` nor `.`.
pub fn strip_extension(raw_name: &str) -> &str {
    match raw_name.rfind('.') {
        Some(pos) => {
            let ext = &raw_name[pos + 1..];
            if ext.is_empty() || ext.contains('/') {
                raw_name
            } else {
                &raw_name[..pos]
            }
        }
        None => raw_name,
    }
}

/// Lowercased NFC form of a name. Filenames from macOS volumes arrive
/// decomposed, so keyword matching has to run on a normalized form.
pub fn match_key(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}

/// Split on every non-alphanumeric character, dropping empty pieces.
pub fn tokenize(key: &str) -> impl Iterator<Item = &str> {
    key.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}
