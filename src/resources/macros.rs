//! Macros for reducing boilerplate when defining resources
//!
//! Most resources only need their schema record, id accessors and an
//! equality that skips server-owned fields. Resources with timestamps
//! implement `Resource` by hand and use [`resource_eq!`] alone.

/// Implement `PartialEq` over the listed business fields
///
/// The identifier and server-assigned timestamps are left out so that a
/// stored record compares equal to the candidate it was created from.
///
/// # Example
/// ```rust,ignore
/// resource_eq!(Customer, [login, password, email, customer_information]);
/// ```
#[macro_export]
macro_rules! resource_eq {
    ($type:ident, [$($field:ident),* $(,)?]) => {
        impl PartialEq for $type {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)*
            }
        }
    };
}

/// Implement `Resource` and `PartialEq` for a resource without timestamps
///
/// The type must have an `id: Option<i64>` field.
///
/// # Example
///
/// ```rust,ignore
/// impl_resource!(OperatorRole {
///     name: "operator_role",
///     route: "/operator_role",
///     table: "operator_roles",
///     not_blank: ["name"],
///     unique: ["name"],
///     natural_ids: ["name"],
///     eq: [name, description],
/// });
/// ```
#[macro_export]
macro_rules! impl_resource {
    (
        $type:ident {
            name: $name:literal,
            route: $route:literal,
            table: $table:literal,
            not_blank: [$($not_blank:literal),* $(,)?],
            unique: [$($unique:literal),* $(,)?],
            natural_ids: [$($natural:literal),* $(,)?],
            eq: [$($field:ident),* $(,)?] $(,)?
        }
    ) => {
        impl $crate::core::resource::Resource for $type {
            const SCHEMA: $crate::core::resource::ResourceSchema =
                $crate::core::resource::ResourceSchema {
                    name: $name,
                    route: $route,
                    table: $table,
                    not_blank: &[$($not_blank),*],
                    unique: &[$($unique),*],
                    natural_ids: &[$($natural),*],
                };

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = Some(id);
            }
        }

        $crate::resource_eq!($type, [$($field),*]);
    };
}
