use serde_json::{json, Value};

use crate::store::application::{domain::entities::collections, ports::outgoing::DocumentStore};
use crate::timeline::application::{
    domain::entities::{TimelineEntry, TimelineItem},
    ports::incoming::use_cases::TimelineError,
};

fn repo_error(e: impl ToString) -> TimelineError {
    TimelineError::RepositoryError(e.to_string())
}

/// The array as stored, untouched, so unchanged entries are written back verbatim.
pub(super) async fn read_entries<E: TimelineEntry>(
    store: &dyn DocumentStore,
) -> Result<Vec<Value>, TimelineError> {
    let Some(document) = store
        .get(collections::PORTFOLIO, E::DOC_ID)
        .await
        .map_err(repo_error)?
    else {
        return Ok(Vec::new());
    };

    match document.data.get(E::FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries.clone()),
        Some(_) => Err(TimelineError::RepositoryError(format!(
            "portfolio/{} field `{}` is not an array",
            E::DOC_ID,
            E::FIELD
        ))),
    }
}

/// Full overwrite of the section document.
pub(super) async fn write_entries<E: TimelineEntry>(
    store: &dyn DocumentStore,
    entries: Vec<Value>,
) -> Result<(), TimelineError> {
    let mut data = json!({});
    data[E::FIELD] = Value::Array(entries);

    store
        .set(collections::PORTFOLIO, E::DOC_ID, data)
        .await
        .map_err(repo_error)
}

pub(super) fn decode_entry<E: TimelineEntry>(
    index: usize,
    value: &Value,
) -> Result<TimelineItem<E>, TimelineError> {
    let entry = serde_json::from_value(value.clone()).map_err(|e| {
        TimelineError::RepositoryError(format!(
            "portfolio/{}[{}] is malformed: {}",
            E::DOC_ID,
            index,
            e
        ))
    })?;
    Ok(TimelineItem { index, entry })
}

pub(super) fn encode_entry<E: TimelineEntry>(entry: &E) -> Result<Value, TimelineError> {
    serde_json::to_value(entry).map_err(repo_error)
}
