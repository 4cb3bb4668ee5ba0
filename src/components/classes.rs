/// Join CSS class fragments in source order.
///
/// `None` and blank fragments are skipped and whitespace is collapsed to a
/// single space. Duplicates are kept, so a later class wins under normal
/// cascade rules.
pub fn class_names<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fragments
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
