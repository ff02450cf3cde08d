//! Macro for declaring repository error enums.

/// Declare a `thiserror` error enum whose variants all carry named fields,
/// plus one snake_case constructor per variant.
///
/// ```ignore
/// define_port_error! {
///     pub enum EmployeeRepositoryError {
///         Query { message: String } => "employee repository query failed: {message}",
///     }
/// }
///
/// let err = EmployeeRepositoryError::query("syntax error");
/// ```
///
/// Constructor arguments take `impl Into<T>` for each field, so adapters can
/// pass `&str` for `String` fields.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        enum PayrollExportError {
            Rejected { employee: i64, reason: String } =>
                "employee {employee} rejected: {reason}",
            SalaryOutOfRange { salary: i64 } => "salary {salary} out of range",
        }
    }

    #[test]
    fn constructors_convert_each_field() {
        let err = PayrollExportError::rejected(7_i64, "no position");
        assert_eq!(
            err,
            PayrollExportError::Rejected {
                employee: 7,
                reason: "no position".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "employee 7 rejected: no position");
    }

    #[test]
    fn camel_case_variants_get_snake_case_constructors() {
        let err = PayrollExportError::salary_out_of_range(-5_i64);
        assert_eq!(err.to_string(), "salary -5 out of range");
    }
}
