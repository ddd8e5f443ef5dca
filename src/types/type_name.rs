/// Returns `core::any::type_name::<T>()` with module paths stripped.
///
/// Generic arguments are kept, so `alloc::vec::Vec<alloc::string::String>`
/// becomes `Vec<String>`.
///
/// # Examples
///
/// ```
/// use valid_rail::types::short_type_name;
///
/// assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
/// assert_eq!(short_type_name::<Option<u8>>(), "Option<u8>");
/// ```
pub fn short_type_name<T: ?Sized>() -> String {
    shorten(core::any::type_name::<T>())
}

pub(crate) fn shorten(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (i, c) in full.char_indices() {
        match c {
            ':' => segment_start = i + 1,
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*' => {
                out.push_str(&full[segment_start..i]);
                out.push(c);
                segment_start = i + 1;
            }
            _ => {}
        }
    }
    out.push_str(&full[segment_start..]);
    out
}
