use crate::app_err::ApplicationError;
use config::{Value, ValueKind};

/// Raw input as it comes out of the settings layers, before validation.
#[derive(Debug, Default)]
pub struct RawConfig {
    pub region: Option<String>,
    pub verbose: Option<bool>,
    pub mark_inactive: Option<Value>,
}

/// Validated configuration handed to the downstream tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    region: String,
    verbose: Option<bool>,
    mark_inactive: bool,
}

impl Configuration {
    pub fn build(input: RawConfig) -> Result<Self, ApplicationError> {
        let mark_inactive = input.mark_inactive.as_ref().is_some_and(is_truthy);

        let region = match input.region {
            Some(region) if !region.is_empty() => region,
            _ => return Err(ApplicationError::MissingRequiredField("REGION")),
        };

        Ok(Configuration {
            region,
            verbose: input.verbose,
            mark_inactive,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn verbose(&self) -> Option<bool> {
        self.verbose
    }

    pub fn mark_inactive(&self) -> bool {
        self.mark_inactive
    }
}

fn is_truthy(value: &Value) -> bool {
    match &value.kind {
        ValueKind::Nil => false,
        ValueKind::Boolean(b) => *b,
        ValueKind::I64(n) => *n != 0,
        ValueKind::I128(n) => *n != 0,
        ValueKind::U64(n) => *n != 0,
        ValueKind::U128(n) => *n != 0,
        ValueKind::Float(f) => *f != 0.0 && !f.is_nan(),
        ValueKind::String(s) => !s.is_empty(),
        ValueKind::Table(_) | ValueKind::Array(_) => true,
    }
}
