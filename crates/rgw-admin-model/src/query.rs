//! Ordered admin query arguments.
//!
//! Every admin operation is described by an explicit, ordered list of
//! `(name, value)` pairs. A pair whose value is absent is kept in the list but
//! never reaches the wire, which lets operation builders push every parameter
//! they support unconditionally.

/// Conversion of a field into a query parameter value.
///
/// Booleans encode as `true`/`false`, integers in invariant decimal. Empty
/// strings and `None` are treated as absent.
pub trait QueryValue {
    /// The encoded value, or `None` when the parameter must be skipped.
    fn into_query_value(self) -> Option<String>;
}

impl QueryValue for String {
    fn into_query_value(self) -> Option<String> {
        (!self.is_empty()).then_some(self)
    }
}

impl QueryValue for &str {
    fn into_query_value(self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_owned())
    }
}

impl QueryValue for &String {
    fn into_query_value(self) -> Option<String> {
        self.as_str().into_query_value()
    }
}

impl QueryValue for bool {
    fn into_query_value(self) -> Option<String> {
        Some(if self { "true" } else { "false" }.to_owned())
    }
}

macro_rules! impl_query_value_for_int {
    ($($ty:ty),+) => {
        $(
            impl QueryValue for $ty {
                fn into_query_value(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )+
    };
}

impl_query_value_for_int!(i32, i64, u32, u64, usize);

impl<T: QueryValue> QueryValue for Option<T> {
    fn into_query_value(self) -> Option<String> {
        self.and_then(QueryValue::into_query_value)
    }
}

/// An ordered list of query arguments.
///
/// # Examples
///
/// ```
/// use rgw_admin_model::QueryArgs;
///
/// let args = QueryArgs::admin()
///     .with("uid", "alice")
///     .with("email", None::<String>)
///     .with("stats", true);
/// let present: Vec<_> = args.present().collect();
/// assert_eq!(present, vec![("format", "json"), ("uid", "alice"), ("stats", "true")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    pairs: Vec<(&'static str, Option<String>)>,
}

impl QueryArgs {
    /// An empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The argument list every admin call starts with: `format=json`.
    #[must_use]
    pub fn admin() -> Self {
        Self::new().with("format", "json")
    }

    /// Append a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl QueryValue) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter.
    pub fn push(&mut self, name: &'static str, value: impl QueryValue) -> &mut Self {
        self.pairs.push((name, value.into_query_value()));
        self
    }

    /// Every pair in insertion order, absent values included.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.pairs
            .iter()
            .map(|(name, value)| (*name, value.as_deref()))
    }

    /// Pairs with a present value, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
    }

    /// The first present value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.present()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    /// Every present value for `name`, in order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.present()
            .filter_map(|(key, value)| (key == name).then_some(value))
            .collect()
    }

    /// Number of pairs, absent values included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the list holds no pairs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
