//! Spelling variants for entity-style and dotted identifiers.

/// `InvoiceLine` → `invoice_line`.
///
/// An underscore goes between a lowercase letter or digit and a following
/// uppercase letter, then the result is lowercased. Spaces and hyphens are
/// kept (`Audit Log` → `audit log`); acronym runs stay joined
/// (`HTTPServer` → `httpserver`).
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.trim().chars() {
        if c.is_uppercase() {
            if let Some(p) = prev {
                if p.is_lowercase() || p.is_ascii_digit() {
                    out.push('_');
                }
            }
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

/// `InvoiceLine` → `invoice-line`.
pub fn to_kebab_case(name: &str) -> String {
    to_snake_case(name).replace('_', "-")
}

/// Snake form with runs of whitespace and hyphens collapsed into one `_`:
/// `Audit Log` → `audit_log`.
fn to_joined_snake(name: &str) -> String {
    let snake = to_snake_case(name);
    let mut out = String::with_capacity(snake.len());
    for c in snake.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// `InvoiceLine` → `invoiceLine`. Only the first character changes.
pub fn to_camel_case(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Push `candidate` unless it is empty or already present.
fn push_unique(out: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !out.contains(&candidate) {
        out.push(candidate);
    }
}

/// Variants for an entity-style identifier (PascalCase or readable words):
/// original, snake_case, kebab-case, camelCase. Readable-word names also get
/// their underscore- and hyphen-joined spellings. Order preserved, no
/// duplicates, empty input yields no variants.
pub fn entity_variants(name: &str) -> Vec<String> {
    let name = name.trim();
    let mut out = Vec::with_capacity(4);
    if name.is_empty() {
        return out;
    }
    push_unique(&mut out, name.to_string());
    push_unique(&mut out, to_snake_case(name));
    push_unique(&mut out, to_kebab_case(name));
    push_unique(&mut out, to_camel_case(name));
    let joined = to_joined_snake(name);
    push_unique(&mut out, joined.replace('_', "-"));
    push_unique(&mut out, joined);
    out
}

/// Variants for a dotted operation name `a.b.c`: the dotted original,
/// `aBC` (first segment as written, the rest capitalized), and `a_b_c`.
pub fn operation_variants(name: &str) -> Vec<String> {
    let name = name.trim();
    let mut out = Vec::with_capacity(3);
    if name.is_empty() {
        return out;
    }
    push_unique(&mut out, name.to_string());

    let segments: Vec<&str> = name.split('.').filter(|s| !s.is_empty()).collect();
    if let Some((head, rest)) = segments.split_first() {
        let mut camel = head.to_string();
        for segment in rest {
            camel.push_str(&capitalize(segment));
        }
        push_unique(&mut out, camel);
    }
    push_unique(&mut out, segments.join("_"));
    out
}
