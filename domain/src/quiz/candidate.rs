//! Candidate answer: the player's in-progress selection

/// Set of selected option strings for the current question.
///
/// Selection order is kept so feedback can echo the answer as entered; no
/// option appears twice. Membership in the question's option set is enforced
/// by the reducer, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateAnswer {
    selected: Vec<String>,
}

impl CandidateAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn contains(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selected
    }

    /// Replace the selection with a single option (radio semantics)
    pub fn select_only(&mut self, option: impl Into<String>) {
        self.selected.clear();
        self.selected.push(option.into());
    }

    /// Add `option` if absent, remove it if present (checkbox semantics).
    ///
    /// Returns whether the option is selected afterwards.
    pub fn toggle(&mut self, option: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(option.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl std::fmt::Display for CandidateAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.selected.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateAnswer {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut candidate = Self::new();
        for option in iter {
            let option = option.into();
            if !candidate.contains(&option) {
                candidate.selected.push(option);
            }
        }
        candidate
    }
}
