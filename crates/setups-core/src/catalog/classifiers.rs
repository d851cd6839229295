//! Curated classifier catalogs for the single-choice classifier prompts.

/// A classifier category that is selected with one constrained prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierCategory {
    DevelopmentStatus,
    IntendedAudience,
    ProgrammingLanguage,
}

const DEVELOPMENT_STATUS: &[&str] = &[
    "1 - Planning",
    "2 - Pre-Alpha",
    "3 - Alpha",
    "4 - Beta",
    "5 - Production/Stable",
];

const INTENDED_AUDIENCE: &[&str] = &[
    "Developers",
    "End Users/Desktop",
    "Education",
    "Science/Research",
    "System Administrators",
];

const PROGRAMMING_LANGUAGE: &[&str] = &[
    "Python :: 3",
    "Python :: 3.8",
    "Python :: 3.9",
    "Python :: 3.10",
    "Python :: 3.11",
];

impl ClassifierCategory {
    /// Categories in prompt order.
    pub const PROMPT_ORDER: [ClassifierCategory; 3] = [
        ClassifierCategory::DevelopmentStatus,
        ClassifierCategory::IntendedAudience,
        ClassifierCategory::ProgrammingLanguage,
    ];

    /// Trove prefix, e.g. "Development Status".
    pub fn label(self) -> &'static str {
        match self {
            Self::DevelopmentStatus => "Development Status",
            Self::IntendedAudience => "Intended Audience",
            Self::ProgrammingLanguage => "Programming Language",
        }
    }

    pub fn choices(self) -> &'static [&'static str] {
        match self {
            Self::DevelopmentStatus => DEVELOPMENT_STATUS,
            Self::IntendedAudience => INTENDED_AUDIENCE,
            Self::ProgrammingLanguage => PROGRAMMING_LANGUAGE,
        }
    }

    pub fn default_choice(self) -> &'static str {
        match self {
            Self::DevelopmentStatus => "1 - Planning",
            Self::IntendedAudience => "Developers",
            Self::ProgrammingLanguage => "Python :: 3.8",
        }
    }

    /// Hint line printed before the prompt.
    pub fn hint(self) -> &'static str {
        match self {
            Self::DevelopmentStatus => {
                "Select 'Development Status' (e.g., 1 - Planning, 5 - Production/Stable):"
            }
            Self::IntendedAudience => {
                "Select 'Intended Audience' (e.g., Developers, End Users/Desktop):"
            }
            Self::ProgrammingLanguage => {
                "Select 'Programming Language' (e.g., Python 3.8, Python 3.9):"
            }
        }
    }
}

/// The three single-choice classifier selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierSelection {
    pub development_status: String,
    pub intended_audience: String,
    pub programming_language: String,
}

impl Default for ClassifierSelection {
    fn default() -> Self {
        Self {
            development_status: ClassifierCategory::DevelopmentStatus
                .default_choice()
                .to_string(),
            intended_audience: ClassifierCategory::IntendedAudience
                .default_choice()
                .to_string(),
            programming_language: ClassifierCategory::ProgrammingLanguage
                .default_choice()
                .to_string(),
        }
    }
}

impl ClassifierSelection {
    /// Store `value` for `category`.
    pub fn set(&mut self, category: ClassifierCategory, value: String) {
        match category {
            ClassifierCategory::DevelopmentStatus => self.development_status = value,
            ClassifierCategory::IntendedAudience => self.intended_audience = value,
            ClassifierCategory::ProgrammingLanguage => self.programming_language = value,
        }
    }

    /// Full trove strings for the selected categories, in prompt order.
    pub fn trove_strings(&self) -> Vec<String> {
        [
            (ClassifierCategory::DevelopmentStatus, &self.development_status),
            (ClassifierCategory::IntendedAudience, &self.intended_audience),
            (ClassifierCategory::ProgrammingLanguage, &self.programming_language),
        ]
        .into_iter()
        .map(|(category, value)| format!("{} :: {}", category.label(), value))
        .collect()
    }
}
