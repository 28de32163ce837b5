//! Smart title synthesis
//!
//! Builds `"{prefix} - {main} ({suffix})"` from three separate title fields
//! (content group, title and subtitle in ID3). Encoders often store the full
//! title in the main field as well, so candidates that already contain the
//! prefix and suffix are dropped before composing.

use mediaont_domain::traits::{FieldLookup, GraphSink};
use mediaont_domain::{vocab, Exactness, Literal};
use tracing::debug;

use crate::dispatcher::Emitter;
use crate::error::MapperError;

/// Local name of the source property for synthesized titles
pub const SMART_TITLE_KEY: &str = "smartTitle";

/// The three fields a composite title is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleFields {
    /// Prefix field, 0 or 1 value
    pub prefix: &'static str,

    /// Main title field, 1 or more values
    pub main: &'static str,

    /// Suffix field, 0 or 1 value
    pub suffix: &'static str,
}

/// Compose the title, or `None` when there is nothing (or nothing
/// unambiguous) to synthesize
pub fn synthesize_title(prefix: &[String], main: &[String], suffix: &[String]) -> Option<String> {
    if prefix.len() > 1 || suffix.len() > 1 || main.is_empty() {
        return None;
    }
    let prefix = prefix.first().map(String::as_str).unwrap_or_default();
    let suffix = suffix.first().map(String::as_str).unwrap_or_default();
    if prefix.is_empty() && suffix.is_empty() {
        return None;
    }

    let wrapped_suffix = format!("({})", suffix);
    let mut candidates = main.iter().filter(|candidate| {
        let has_prefix = prefix.is_empty() || candidate.starts_with(prefix);
        let has_suffix = suffix.is_empty() || candidate.ends_with(&wrapped_suffix);
        !(has_prefix && has_suffix)
    });

    let main = candidates.next()?;
    if candidates.next().is_some() {
        return None;
    }

    let mut title = if prefix.is_empty() {
        main.clone()
    } else {
        format!("{} - {}", prefix, main)
    };
    if !suffix.is_empty() {
        title.push_str(&format!(" ({})", suffix));
    }
    Some(title)
}

/// Emit the synthesized title of the fields found in `lookup`, if any
///
/// Returns whether a title was emitted.
pub fn add_smart_title<S, L>(
    emitter: &mut Emitter<'_, S>,
    fields: &TitleFields,
    lookup: &L,
) -> Result<bool, MapperError>
where
    S: GraphSink,
    S::Error: std::fmt::Display,
    L: FieldLookup + ?Sized,
{
    // arity counts undecodable values too
    let arity = |key: &str| lookup.field(key).map_or(0, |field| field.value.len());
    if arity(fields.prefix) > 1 || arity(fields.suffix) > 1 {
        debug!("no smart title: several {} or {} values", fields.prefix, fields.suffix);
        return Ok(false);
    }

    let texts = |key: &str| {
        lookup
            .field(key)
            .map(|field| field.value.texts())
            .unwrap_or_default()
    };
    let prefix = texts(fields.prefix);
    let main = texts(fields.main);
    let suffix = texts(fields.suffix);

    let Some(title) = synthesize_title(&prefix, &main, &suffix) else {
        debug!("no smart title from {}/{}/{}", fields.prefix, fields.main, fields.suffix);
        return Ok(false);
    };

    debug!("smart title: {}", title);
    let literal = Literal::with_language(title, emitter.config().language.as_deref());
    emitter.emit_literal(vocab::ma::TITLE, Exactness::Exact, SMART_TITLE_KEY, literal)?;
    Ok(true)
}
