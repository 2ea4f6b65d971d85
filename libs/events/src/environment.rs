//! The environment facts collaborator.
//!
//! Events record facts about the host that emitted them. The reader is
//! injected into the builder rather than consulted as ambient process state,
//! so the construction pipeline stays pure and testable.

/// Read-only lookups for facts about the execution environment.
///
/// Every lookup returns a string, empty when the underlying fact is unset.
/// Lookups never fail; an absent fact is not a validation error.
pub trait EnvironmentFacts: Send + Sync {
    /// Execution runtime identifier.
    fn runtime(&self) -> String;
    /// Name of the running function or service.
    fn function_name(&self) -> String;
    /// RAM allocated to the function.
    fn function_memory_size(&self) -> String;
    /// Version of the running function.
    fn function_version(&self) -> String;
    /// Cloud region the process runs in.
    fn region(&self) -> String;
}

/// Facts read from the conventional AWS Lambda process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

fn var_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

impl EnvironmentFacts for ProcessEnv {
    fn runtime(&self) -> String {
        var_or_empty("AWS_EXECUTION_ENV")
    }

    fn function_name(&self) -> String {
        var_or_empty("AWS_LAMBDA_FUNCTION_NAME")
    }

    fn function_memory_size(&self) -> String {
        var_or_empty("AWS_LAMBDA_FUNCTION_MEMORY_SIZE")
    }

    fn function_version(&self) -> String {
        var_or_empty("AWS_LAMBDA_FUNCTION_VERSION")
    }

    fn region(&self) -> String {
        var_or_empty("AWS_REGION")
    }
}

/// Facts supplied up front as plain values.
///
/// Suits hosts without the Lambda environment convention, and tests that
/// need a known environment. The default value reports every fact as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticFacts {
    pub runtime: String,
    pub function_name: String,
    pub function_memory_size: String,
    pub function_version: String,
    pub region: String,
}

impl EnvironmentFacts for StaticFacts {
    fn runtime(&self) -> String {
        self.runtime.clone()
    }

    fn function_name(&self) -> String {
        self.function_name.clone()
    }

    fn function_memory_size(&self) -> String {
        self.function_memory_size.clone()
    }

    fn function_version(&self) -> String {
        self.function_version.clone()
    }

    fn region(&self) -> String {
        self.region.clone()
    }
}
