use apikit::{validation, Violations};

use crate::contract::model::NoteDraft;

/// Title required and at most `max_title_length` characters; content required.
pub fn validate_draft(draft: &NoteDraft, max_title_length: usize) -> Violations {
    let mut v = Violations::new();
    v.check(validation::required("title", &draft.title))
        .check(validation::max_chars(
            "title",
            &draft.title,
            max_title_length,
        ))
        .check(validation::required("content", &draft.content));
    v
}
