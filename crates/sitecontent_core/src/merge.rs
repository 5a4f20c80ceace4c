//! Document merger: template backfill for partial remote documents.
//!
//! # Responsibility
//! - Overlay a remote document onto its template, one top-level field at a
//!   time.
//! - Produce a complete typed document for any remote input.
//!
//! # Invariants
//! - The merge is shallow. A remote nested object replaces the template's
//!   nested object whole.
//! - Remote keys unknown to the template are ignored.
//! - Merging never fails. An absent or non-object remote yields the template;
//!   a remote field that cannot be read as the template field's type keeps the
//!   template value for that field.

use crate::model::{ContentDocument, DocumentKey, PageContent};
use crate::model::homepage::HomepageContent;
use crate::model::pages::{
    AboutPageContent, BlogPageContent, GlobalPresencePageContent, JoinPageContent,
    ServicesPageContent,
};
use log::warn;
use serde_json::Value;

/// Overlays `remote`'s top-level fields onto `template`.
///
/// The result has exactly the template's field set.
pub fn merge_shallow(template: &Value, remote: Option<&Value>) -> Value {
    let mut merged = template.clone();
    if let (Value::Object(fields), Some(Value::Object(remote_fields))) = (&mut merged, remote) {
        for (name, value) in fields.iter_mut() {
            if let Some(remote_value) = remote_fields.get(name) {
                *value = remote_value.clone();
            }
        }
    }
    merged
}

/// Merges a remote document into its typed template.
///
/// `None` means the document does not exist in the store.
pub fn merge_document<T: ContentDocument>(remote: Option<&Value>) -> T {
    let template = T::template();
    let Ok(template_value) = serde_json::to_value(&template) else {
        return template;
    };

    let merged = merge_shallow(&template_value, remote);
    match serde_json::from_value::<T>(merged) {
        Ok(document) => document,
        Err(err) => {
            warn!(
                "event=merge_drift module=merge status=fallback key={} error={}",
                T::KEY,
                err
            );
            merge_field_by_field(template, template_value, remote)
        }
    }
}

/// Merges the remote document stored under `key`.
pub fn merge_page(key: DocumentKey, remote: Option<&Value>) -> PageContent {
    match key {
        DocumentKey::Homepage => merge_document::<HomepageContent>(remote).into_page(),
        DocumentKey::AboutPage => merge_document::<AboutPageContent>(remote).into_page(),
        DocumentKey::BlogPage => merge_document::<BlogPageContent>(remote).into_page(),
        DocumentKey::ServicesPage => merge_document::<ServicesPageContent>(remote).into_page(),
        DocumentKey::GlobalPresencePage => {
            merge_document::<GlobalPresencePageContent>(remote).into_page()
        }
        DocumentKey::JoinPage => merge_document::<JoinPageContent>(remote).into_page(),
    }
}

fn merge_field_by_field<T: ContentDocument>(
    template: T,
    template_value: Value,
    remote: Option<&Value>,
) -> T {
    let Some(Value::Object(remote_fields)) = remote else {
        return template;
    };

    let mut accepted = template_value;
    let field_names: Vec<String> = match &accepted {
        Value::Object(fields) => fields.keys().cloned().collect(),
        _ => return template,
    };

    for name in field_names {
        let Some(remote_value) = remote_fields.get(&name) else {
            continue;
        };
        let mut candidate = accepted.clone();
        if let Value::Object(fields) = &mut candidate {
            fields.insert(name.clone(), remote_value.clone());
        }
        if serde_json::from_value::<T>(candidate.clone()).is_ok() {
            accepted = candidate;
        } else {
            warn!(
                "event=merge_drift module=merge status=field_fallback key={} field={}",
                T::KEY,
                name
            );
        }
    }

    serde_json::from_value(accepted).unwrap_or(template)
}

#[cfg(test)]
mod tests {
    use super::{merge_document, merge_shallow};
    use crate::model::pages::JoinPageContent;
    use serde_json::json;

    #[test]
    fn merge_shallow_keeps_template_field_set() {
        let template = json!({ "a": 1, "b": { "x": 1, "y": 2 } });
        let remote = json!({ "b": { "x": 9 }, "c": true });

        let merged = merge_shallow(&template, Some(&remote));
        assert_eq!(merged, json!({ "a": 1, "b": { "x": 9 } }));
    }

    #[test]
    fn merge_shallow_ignores_non_object_remote() {
        let template = json!({ "a": 1 });
        assert_eq!(merge_shallow(&template, Some(&json!([1, 2]))), template);
        assert_eq!(merge_shallow(&template, None), template);
    }

    #[test]
    fn mistyped_field_falls_back_without_dropping_valid_fields() {
        let remote = json!({ "pageTitle": 42, "formTitle": "Apply" });
        let merged: JoinPageContent = merge_document(Some(&remote));

        assert_eq!(merged.page_title, JoinPageContent::default().page_title);
        assert_eq!(merged.form_title, "Apply");
    }

    #[test]
    fn null_field_falls_back_to_template() {
        let remote = json!({ "successTitle": null });
        let merged: JoinPageContent = merge_document(Some(&remote));
        assert_eq!(merged, JoinPageContent::default());
    }
}
