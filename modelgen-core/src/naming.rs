//! String conversions between table, class, and method names.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Reduce a plural noun to its singular form.
///
/// Naive English inflection, enough for conventional table names
/// ("users", "categories", "addresses"). Words it cannot handle pass
/// through unchanged.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies")
        && !stem.is_empty()
    {
        return format!("{stem}y");
    }
    if ["sses", "shes", "ches", "xes"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 1 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Derive a class name from a table name (e.g., "user_accounts" -> "UserAccount").
///
/// The table prefix, if any, is stripped first and the final segment is
/// singularized before pascal-casing.
pub fn table_to_class_name(table: &str, prefix: Option<&str>) -> String {
    let table = match prefix {
        Some(p) if !p.is_empty() => table.strip_prefix(p).unwrap_or(table),
        _ => table,
    };

    let segments: Vec<&str> = table.split('_').filter(|s| !s.is_empty()).collect();
    let mut name = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i == segments.len() - 1 {
            name.push_str(&to_pascal_case(&singularize(segment)));
        } else {
            name.push_str(&to_pascal_case(segment));
        }
    }
    name
}

/// Derive an accessor/mutator method name from an attribute name.
///
/// Runs of non-alphanumeric characters become word breaks, each word is
/// title-cased and the words are joined behind the prefix:
/// `attribute_to_method("get", "user_name") == "getUserName"`.
pub fn attribute_to_method(prefix: &str, attribute: &str) -> String {
    let mut name = String::from(prefix);
    for word in attribute
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            name.extend(c.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}
