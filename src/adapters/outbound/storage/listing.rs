//! Single-page listings with S3 semantics on top of `object_store`
//!
//! object_store treats a list prefix as whole path segments and streams every
//! page. S3 prefixes are plain string prefixes and a request returns one page,
//! so the search starts at the prefix's directory (and, for flat listings,
//! just before the prefix itself), filters by string prefix and stops after
//! `max_keys` entries.

use std::pin::pin;

use futures::{future, TryStreamExt};
use object_store::{path::Path as ObjectPath, ObjectMeta, ObjectStore as ObjectStoreBackend};

use crate::domain::{
    errors::{StorageError, StorageResult},
    models::{ListObjectsInput, ListObjectsOutput, ObjectSummary, DEFAULT_MAX_KEYS},
};

/// Delimiter object_store understands for grouped listings
const PATH_DELIMITER: &str = "/";

pub(super) async fn list_page(
    store: &dyn ObjectStoreBackend,
    input: ListObjectsInput,
) -> StorageResult<ListObjectsOutput> {
    let prefix = input.prefix.clone().unwrap_or_default();
    let max_keys = input.max_keys.unwrap_or(DEFAULT_MAX_KEYS);
    let root = search_root(&prefix)?;
    let offset = input.offset().map(str::to_string);

    let delimited = match input.delimiter.as_deref() {
        None => false,
        Some(PATH_DELIMITER) => true,
        Some(other) => {
            return Err(StorageError::UnsupportedOperation {
                operation: "listObjects".to_string(),
                reason: format!("delimiter {:?} is not supported, only \"/\"", other),
            })
        }
    };

    // A zero-sized page is empty and complete, never truncated without a token
    let page = if max_keys == 0 {
        Page::default()
    } else if delimited {
        delimited_page(store, root.as_ref(), &prefix, offset.as_deref(), max_keys).await?
    } else {
        flat_page(store, root.as_ref(), &prefix, offset.as_deref(), max_keys).await?
    };

    let next_continuation_token = if page.is_truncated {
        page.last_key
    } else {
        None
    };

    Ok(ListObjectsOutput {
        name: input.bucket,
        prefix: input.prefix,
        delimiter: input.delimiter,
        max_keys,
        key_count: page.contents.len() + page.common_prefixes.len(),
        is_truncated: page.is_truncated,
        contents: page.contents,
        common_prefixes: page.common_prefixes,
        continuation_token: input.continuation_token,
        next_continuation_token,
        start_after: input.start_after,
    })
}

#[derive(Default)]
struct Page {
    contents: Vec<ObjectSummary>,
    common_prefixes: Vec<String>,
    is_truncated: bool,
    last_key: Option<String>,
}

/// Directory to hand to object_store for a string prefix
fn search_root(prefix: &str) -> StorageResult<Option<ObjectPath>> {
    let dir = match prefix.rfind('/') {
        Some(idx) => &prefix[..idx],
        None => return Ok(None),
    };

    if dir.is_empty() {
        return Ok(None);
    }

    let path = ObjectPath::parse(dir).map_err(object_store::Error::from)?;
    Ok(Some(path))
}

fn offset_path(offset: &str) -> StorageResult<ObjectPath> {
    Ok(ObjectPath::parse(offset).map_err(object_store::Error::from)?)
}

/// Exclusive start for a flat scan: the later of the caller's offset and the
/// prefix without its last character, which sorts before every matching key.
fn scan_offset(prefix: &str, offset: Option<&str>) -> StorageResult<Option<ObjectPath>> {
    let offset = offset.map(offset_path).transpose()?;
    let before_prefix = prefix
        .char_indices()
        .last()
        .map(|(idx, _)| &prefix[..idx])
        .filter(|start| !start.is_empty())
        .and_then(|start| ObjectPath::parse(start).ok());

    Ok(offset.into_iter().chain(before_prefix).max())
}

fn summary(meta: ObjectMeta) -> ObjectSummary {
    ObjectSummary {
        key: meta.location.to_string(),
        size: meta.size,
        e_tag: meta.e_tag,
        last_modified: meta.last_modified,
        version_id: meta.version,
    }
}

async fn flat_page(
    store: &dyn ObjectStoreBackend,
    root: Option<&ObjectPath>,
    prefix: &str,
    offset: Option<&str>,
    max_keys: usize,
) -> StorageResult<Page> {
    let stream = match scan_offset(prefix, offset)? {
        Some(start) => store.list_with_offset(root, &start),
        None => store.list(root),
    };
    let mut matching =
        pin!(stream.try_filter(|meta| future::ready(meta.location.as_ref().starts_with(prefix))));

    let mut page = Page::default();
    while let Some(meta) = matching.try_next().await? {
        if page.contents.len() == max_keys {
            page.is_truncated = true;
            break;
        }
        page.last_key = Some(meta.location.to_string());
        page.contents.push(summary(meta));
    }

    Ok(page)
}

enum Entry {
    Object(ObjectMeta),
    Prefix(String),
}

impl Entry {
    fn key(&self) -> &str {
        match self {
            Entry::Object(meta) => meta.location.as_ref(),
            Entry::Prefix(prefix) => prefix,
        }
    }
}

async fn delimited_page(
    store: &dyn ObjectStoreBackend,
    root: Option<&ObjectPath>,
    prefix: &str,
    offset: Option<&str>,
    max_keys: usize,
) -> StorageResult<Page> {
    let listing = store.list_with_delimiter(root).await?;

    let mut entries: Vec<Entry> = listing
        .objects
        .into_iter()
        .map(Entry::Object)
        .chain(
            listing
                .common_prefixes
                .into_iter()
                .map(|path| Entry::Prefix(format!("{}{}", path, PATH_DELIMITER))),
        )
        .filter(|entry| entry.key().starts_with(prefix))
        .filter(|entry| offset.map_or(true, |offset| entry.key() > offset))
        .collect();
    entries.sort_by(|a, b| a.key().cmp(b.key()));

    let mut page = Page {
        is_truncated: entries.len() > max_keys,
        ..Default::default()
    };
    for entry in entries.into_iter().take(max_keys) {
        page.last_key = Some(entry.key().to_string());
        match entry {
            Entry::Object(meta) => page.contents.push(summary(meta)),
            Entry::Prefix(prefix) => page.common_prefixes.push(prefix),
        }
    }

    Ok(page)
}
