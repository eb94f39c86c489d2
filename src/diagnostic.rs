use derive_more::Display;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "[line {}] Error{}: {}", line, location, message)]
pub struct Diagnostic {
    pub line: usize,
    // either empty, " at end" or " at '<lexeme>'"
    pub location: String,
    pub message: String,
}

/// Collects lexical and syntax problems for one pass over some source text.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    reports: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, line: usize, location: &str, message: &str) {
        let diagnostic = Diagnostic {
            line,
            location: location.to_string(),
            message: message.to_string(),
        };
        debug!("reported {}", diagnostic);
        self.reports.push(diagnostic);
    }

    pub fn had_error(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.reports.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
