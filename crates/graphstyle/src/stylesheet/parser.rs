//! Character scanner for the stylesheet text format.
//!
//! The scanner walks the input once, tracking whether it is inside a quoted
//! string and inside a property block. Outside of blocks, non-whitespace
//! characters accumulate into the selector text; inside blocks, every
//! character accumulates into the block body. Quote characters only toggle
//! string mode and are not kept, so braces inside quotes are plain text.

use indexmap::IndexMap;

use super::ParseError;
use crate::Properties;

/// Raw output of [`scan`]: block bodies keyed by selector text, plus
/// every structural problem seen along the way.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub(crate) blocks: IndexMap<String, String>,
    pub(crate) diagnostics: Vec<ParseError>,
}

pub(crate) fn scan(text: &str) -> Scan {
    let mut out = Scan::default();
    let mut inside_string = false;
    let mut inside_props = false;
    let mut keyword = String::new();
    let mut props = String::new();
    let mut string_start = 0;
    let mut block_start = 0;

    for (offset, c) in text.chars().enumerate() {
        match c {
            '{' if !inside_string => {
                if inside_props {
                    out.diagnostics.push(ParseError::NestedBlock { offset });
                } else {
                    block_start = offset;
                }
                inside_props = true;
                continue;
            }
            '}' if !inside_string => {
                if !inside_props {
                    out.diagnostics.push(ParseError::UnmatchedClose { offset });
                }
                inside_props = false;
                out.blocks
                    .insert(std::mem::take(&mut keyword), std::mem::take(&mut props));
                continue;
            }
            '\'' => {
                inside_string = !inside_string;
                if inside_string {
                    string_start = offset;
                }
                continue;
            }
            _ => {}
        }

        if inside_props {
            props.push(c);
        } else if !c.is_whitespace() {
            keyword.push(c);
        }
    }

    if inside_string {
        out.diagnostics.push(ParseError::UnterminatedString {
            offset: string_start,
        });
    }
    if inside_props {
        out.diagnostics.push(ParseError::UnterminatedBlock {
            offset: block_start,
        });
    } else if !keyword.is_empty() {
        out.diagnostics
            .push(ParseError::TrailingSelector { selector: keyword });
    }
    out
}

/// Splits a block body into properties.
///
/// Pieces are separated by `;`. Each piece is split at every `:`, the first
/// segment is the key and the second the value, so anything after a second
/// colon is discarded. Pieces with an empty key or value are skipped.
pub(crate) fn split_properties(body: &str) -> Properties {
    let mut properties = Properties::new();
    for piece in body.split(';') {
        let mut segments = piece.split(':');
        let (Some(key), Some(value)) = (segments.next(), segments.next()) else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        properties.insert(key.to_string(), value.to_string());
    }
    properties
}
