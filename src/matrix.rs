//! Matrix Parser — raw text into a validated, labeled square weight matrix.
//!
//! DESIGN
//! ======
//! Two accepted forms, distinguished by the first token of the first
//! non-empty line: a token containing any alphabetic character makes the
//! input labeled (first line lists the node labels, each data row is
//! prefixed by its own label), otherwise every line is a bare numeric row
//! and labels default to the stringified 0-based indices. The parser
//! classifies, validates, and returns a [`Graph`]; it never mutates ambient
//! state and never panics past the boundary.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while parsing adjacency-matrix text.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    /// No non-empty lines remain after trimming.
    #[error("the input is empty")]
    EmptyInput,

    /// A labeled row does not start with the label its position demands.
    #[error("row {row} header does not match: expected '{expected}', got '{actual}'")]
    HeaderMismatch { row: usize, expected: String, actual: String },

    /// A weight token failed numeric parse.
    #[error("non-numeric value in row {row}: '{value}'")]
    NonNumericValue { row: usize, value: String },

    /// Edge weights must be zero (no edge) or positive.
    #[error("negative weight in row {row}: {value}")]
    NegativeWeight { row: usize, value: String },

    /// The same label names two different rows/columns.
    #[error("duplicate node label: '{0}'")]
    DuplicateLabel(String),

    /// Row count and row lengths do not agree on a single dimension.
    #[error("the adjacency matrix must be square: row {row} has {len} values, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
}

// =============================================================================
// GRAPH
// =============================================================================

/// A validated, labeled adjacency matrix.
///
/// Invariants: `weights` is square, `labels` are unique and one per
/// row/column, every weight is `>= 0` (zero means no edge; symmetry is NOT
/// required, directed graphs are allowed). Created once per successful
/// parse, replaced wholesale on the next upload, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    labels: Vec<String>,
    weights: Vec<Vec<f64>>,
}

impl Graph {
    /// Number of nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Display label for a node index. Out-of-range indices fall back to the
    /// raw index as its own string so rendering never hard-fails.
    #[must_use]
    pub fn label(&self, node: usize) -> String {
        self.labels.get(node).cloned().unwrap_or_else(|| node.to_string())
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Parse adjacency-matrix text into a [`Graph`].
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first violation encountered; on
/// failure no partial graph is ever returned.
pub fn parse(text: &str) -> Result<Graph, ParseError> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let header: Vec<&str> = lines[0].split_whitespace().collect();
    let labeled = header
        .first()
        .is_some_and(|tok| tok.chars().any(|c| c.is_ascii_alphabetic()));

    if labeled { parse_labeled(&lines, &header) } else { parse_bare(&lines) }
}

/// Labeled form: first line = labels, each data row prefixed by its label.
fn parse_labeled(lines: &[&str], header: &[&str]) -> Result<Graph, ParseError> {
    let labels: Vec<String> = header.iter().map(|s| (*s).to_owned()).collect();
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            return Err(ParseError::DuplicateLabel(label.clone()));
        }
    }

    let n = labels.len();
    let mut weights = Vec::with_capacity(n);
    for (i, line) in lines[1..].iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(expected) = labels.get(i) else {
            // More data rows than labels.
            return Err(ParseError::NotSquare { row: i + 1, len: tokens.len().saturating_sub(1), expected: n });
        };
        let actual = tokens.first().copied().unwrap_or_default();
        if actual != expected {
            return Err(ParseError::HeaderMismatch {
                row: i + 1,
                expected: expected.clone(),
                actual: actual.to_owned(),
            });
        }
        weights.push(parse_row(&tokens[1..], i + 1)?);
    }

    finish(labels, weights)
}

/// Bare numeric form: every line is a full row; labels default to "0".."N-1".
fn parse_bare(lines: &[&str]) -> Result<Graph, ParseError> {
    let mut weights = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        weights.push(parse_row(&tokens, i + 1)?);
    }
    let labels = (0..weights.len()).map(|i| i.to_string()).collect();
    finish(labels, weights)
}

fn parse_row(tokens: &[&str], row: usize) -> Result<Vec<f64>, ParseError> {
    tokens
        .iter()
        .map(|tok| {
            let value: f64 = tok
                .parse()
                .map_err(|_| ParseError::NonNumericValue { row, value: (*tok).to_owned() })?;
            if value < 0.0 {
                return Err(ParseError::NegativeWeight { row, value: (*tok).to_owned() });
            }
            Ok(value)
        })
        .collect()
}

/// Post-condition: the matrix is non-empty and square against the labels.
fn finish(labels: Vec<String>, weights: Vec<Vec<f64>>) -> Result<Graph, ParseError> {
    let n = labels.len();
    if weights.len() != n {
        return Err(ParseError::NotSquare { row: weights.len() + 1, len: 0, expected: n });
    }
    for (i, row) in weights.iter().enumerate() {
        if row.len() != n {
            return Err(ParseError::NotSquare { row: i + 1, len: row.len(), expected: n });
        }
    }
    Ok(Graph { labels, weights })
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod tests;
