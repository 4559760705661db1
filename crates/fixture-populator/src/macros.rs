//! Declarative descriptor tables.

/// Implement [`Bean`](crate::Bean) for a `Default` struct by listing its
/// public methods.
///
/// One-argument entries become mutator descriptors that call the method of
/// the same name; zero-argument entries become accessors. The struct's
/// `Default` impl serves as the no-argument constructor.
///
/// ```rust
/// use fixture_populator::{bean, Populator};
///
/// #[derive(Default)]
/// struct Address {
///     city: Option<String>,
///     zip: Option<i32>,
/// }
///
/// impl Address {
///     fn set_city(&mut self, city: String) {
///         self.city = Some(city);
///     }
///     fn set_zip(&mut self, zip: i32) {
///         self.zip = Some(zip);
///     }
///     fn city(&self) -> Option<&str> {
///         self.city.as_deref()
///     }
/// }
///
/// bean! {
///     Address {
///         fn set_city(String);
///         fn set_zip(i32);
///         fn city();
///     }
/// }
///
/// let address = Populator::<Address>::new().make().unwrap();
/// assert_eq!(address.city(), Some("string"));
/// assert_eq!(address.zip, Some(1));
/// ```
#[macro_export]
macro_rules! bean {
    (@method $bean:ty, $method:ident, $param:ty) => {
        $crate::MethodDescriptor::setter(
            ::std::stringify!($method),
            |bean: &mut $bean, value: $param| {
                bean.$method(value);
            },
        )
    };
    (@method $bean:ty, $method:ident) => {
        $crate::MethodDescriptor::accessor(::std::stringify!($method))
    };
    ($bean:ty { $( fn $method:ident ( $($param:ty)? ); )* }) => {
        impl $crate::Bean for $bean {
            fn construct() -> ::std::result::Result<Self, $crate::BoxError> {
                ::std::result::Result::Ok(<$bean as ::std::default::Default>::default())
            }

            fn methods() -> ::std::vec::Vec<$crate::MethodDescriptor<Self>> {
                ::std::vec![$($crate::bean!(@method $bean, $method $(, $param)?)),*]
            }
        }
    };
}
