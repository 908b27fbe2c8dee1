//! Error macros for algraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::AlgoError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::AlgoError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a vertex outside `0..$count`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $count:expr) => {
        if $vertex >= $count {
            return Err($crate::error::AlgoError::vertex_out_of_range(
                $vertex, $count,
            ));
        }
    };
}
