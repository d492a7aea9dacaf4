//! Variadic shorthands for boolean detector composition

/// Logical AND of detectors listed inline
///
/// Expands to [`BooleanDetector::and`](crate::events::BooleanDetector::and)
/// over a vector of the arguments, so the result is a `Result` and an empty
/// list fails with `EmptyOperandSet`.
///
/// ```ignore
/// let both = and![above_horizon, sunlit]?;
/// ```
#[macro_export]
macro_rules! and {
    ($($detector:expr),* $(,)?) => {
        {
            let operands: ::std::vec::Vec<$crate::events::Detector<_>> =
                ::std::vec![$($crate::events::Detector::from($detector)),*];
            $crate::events::BooleanDetector::and(operands)
        }
    };
}

/// Logical OR of detectors listed inline
///
/// Expands to [`BooleanDetector::or`](crate::events::BooleanDetector::or).
#[macro_export]
macro_rules! or {
    ($($detector:expr),* $(,)?) => {
        {
            let operands: ::std::vec::Vec<$crate::events::Detector<_>> =
                ::std::vec![$($crate::events::Detector::from($detector)),*];
            $crate::events::BooleanDetector::or(operands)
        }
    };
}
