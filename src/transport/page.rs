use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{Marker, Page, PageNumber, PageSize, PageToken, PaginationOptions};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response reports unusable pagination metadata: {field}={value}")]
    InvalidPageMetadata { field: &'static str, value: u64 },
}

/// A resource record as it appears on the wire.
///
/// `ITEMS_FIELD` names the array that holds the records in a listing envelope.
pub(crate) trait WireRecord: Sized {
    type Json: DeserializeOwned;
    const ITEMS_FIELD: &'static str;

    fn from_json(json: Self::Json) -> Self;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageMetadataJson {
    #[serde(default)]
    page_number: Option<u32>,
    #[serde(default)]
    page_count: Option<u64>,
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl PageMetadataJson {
    /// An explicit token wins; otherwise the marker comes from comparing the
    /// cumulative item count with the reported total.
    fn marker(&self, item_count: usize) -> Result<Option<Marker>, TransportError> {
        if let Some(token) = self
            .next_page_token
            .clone()
            .and_then(|token| PageToken::new(token).ok())
        {
            return Ok(Some(Marker::Token(token)));
        }

        let (Some(page_number), Some(page_size), Some(total_count)) =
            (self.page_number, self.page_size, self.total_count)
        else {
            return Ok(None);
        };

        let on_page = self.page_count.unwrap_or(item_count as u64);
        let fetched = u64::from(page_number.saturating_sub(1))
            .saturating_mul(u64::from(page_size))
            .saturating_add(on_page);
        if fetched >= total_count {
            return Ok(None);
        }

        let next_size =
            PageSize::new(page_size).map_err(|_| TransportError::InvalidPageMetadata {
                field: PageSize::FIELD,
                value: page_size.into(),
            })?;
        let next_number = PageNumber::new(page_number.saturating_add(1)).map_err(|_| {
            TransportError::InvalidPageMetadata {
                field: PageNumber::FIELD,
                value: page_number.into(),
            }
        })?;
        Ok(Some(Marker::PageNumber {
            page_number: next_number,
            page_size: next_size,
        }))
    }
}

pub fn encode_pagination_query(options: &PaginationOptions) -> Vec<(String, String)> {
    let mut query = Vec::new();
    if let Some(page_number) = options.page_number {
        query.push((PageNumber::FIELD.to_owned(), page_number.get().to_string()));
    }
    if let Some(page_size) = options.page_size {
        query.push((PageSize::FIELD.to_owned(), page_size.get().to_string()));
    }
    if let Some(page_token) = &options.page_token {
        query.push((PageToken::FIELD.to_owned(), page_token.as_str().to_owned()));
    }
    query
}

pub(crate) fn decode_page<R: WireRecord>(json: &str) -> Result<Page<R>, TransportError> {
    let mut envelope: Map<String, Value> = serde_json::from_str(json)?;
    let records = match envelope.remove(R::ITEMS_FIELD) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value::<Vec<R::Json>>(value)?,
    };
    let metadata: PageMetadataJson = serde_json::from_value(Value::Object(envelope))?;
    let marker = metadata.marker(records.len())?;

    Ok(Page::new(records.into_iter().map(R::from_json).collect(), marker)
        .with_metadata(
            metadata.page_number,
            metadata.page_size,
            metadata.total_count,
        ))
}

pub(crate) fn decode_record<R: WireRecord>(json: &str) -> Result<R, TransportError> {
    let record: R::Json = serde_json::from_str(json)?;
    Ok(R::from_json(record))
}
