//! Normalization pipeline.
//!
//! Applies the five rewrite handlers to the input text in a fixed order,
//! each stage consuming the previous stage's full output:
//!
//! 1. `import-into` — before `import-from`, which relies on every
//!    `IMPORT INTO` block already being gone
//! 2. `import-from`
//! 3. `group-concat` — before `convert-charset`, because `CONVERT` often
//!    wraps a `GROUP_CONCAT` whose separator text can look like a charset
//! 4. `convert-charset`
//! 5. `regexp-like`
//!
//! # Example
//!
//! ```
//! use exasol_sql_normalizer::normalizer::normalize;
//!
//! let sql = "SELECT GROUP_CONCAT(col SEPARATOR ',') FROM t";
//! assert_eq!(normalize(sql), "SELECT GROUP_CONCAT(col) FROM t");
//! ```

use serde::Serialize;

use crate::{
    config::HandlersConfig,
    handlers::{
        convert::normalize_convert_charset, group_concat::normalize_group_concat,
        import_from::normalize_import_from, import_into::normalize_import_into,
        regexp_like::normalize_regexp_like
    }
};

/// One named transformation stage.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Stage name, also the key used by `[handlers] disabled` in config.
    pub name: &'static str,
    run:      fn(&str) -> String
}

impl Stage {
    /// Apply this stage to `sql`.
    pub fn apply(&self, sql: &str) -> String {
        (self.run)(sql)
    }
}

/// The pipeline stages in execution order. The order is a correctness
/// requirement, not a preference.
pub const STAGES: [Stage; 5] = [
    Stage {
        name: "import-into",
        run:  normalize_import_into
    },
    Stage {
        name: "import-from",
        run:  normalize_import_from
    },
    Stage {
        name: "group-concat",
        run:  normalize_group_concat
    },
    Stage {
        name: "convert-charset",
        run:  normalize_convert_charset
    },
    Stage {
        name: "regexp-like",
        run:  normalize_regexp_like
    }
];

/// Rewrite Exasol-specific SQL into standard SQL.
///
/// Total and deterministic: any input produces some output, and malformed
/// dialect syntax is passed through verbatim rather than rejected.
#[must_use]
pub fn normalize(sql: &str) -> String {
    STAGES
        .iter()
        .fold(sql.to_string(), |current, stage| stage.apply(&current))
}

/// Pipeline runner that tracks what each stage did.
#[derive(Debug, Default)]
pub struct Normalizer {
    disabled: Vec<String>
}

/// Result of running the pipeline over one input.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeResult {
    /// The normalized SQL.
    pub sql:    String,
    /// Per-stage outcomes in execution order (skipped stages are absent).
    pub stages: Vec<StageOutcome>
}

/// What one stage did to the text.
#[derive(Debug, Clone, Serialize)]
pub struct StageOutcome {
    pub stage:   &'static str,
    pub changed: bool
}

impl NormalizeResult {
    /// Whether any stage rewrote the text.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.stages.iter().any(|s| s.changed)
    }
}

impl Normalizer {
    /// Create a normalizer running all five stages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer honoring the configured disabled-stage list.
    #[must_use]
    pub fn with_config(config: &HandlersConfig) -> Self {
        Self {
            disabled: config.disabled.clone()
        }
    }

    /// Run the pipeline over `sql`.
    ///
    /// Stage changes are detected by comparing each stage's input and output,
    /// keeping the handler functions themselves pure text-to-text transforms.
    #[must_use]
    pub fn process(&self, sql: &str) -> NormalizeResult {
        let mut current = sql.to_string();
        let mut stages = Vec::with_capacity(STAGES.len());

        for stage in &STAGES {
            if self.disabled.iter().any(|d| d == stage.name) {
                continue;
            }
            let next = stage.apply(&current);
            stages.push(StageOutcome {
                stage:   stage.name,
                changed: next != current
            });
            current = next;
        }

        NormalizeResult {
            sql: current,
            stages
        }
    }
}
