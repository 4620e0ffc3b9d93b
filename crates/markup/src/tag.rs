//! Case and quoting canonicalization of a single tag.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

/// Lowercase the tag name and attribute names of `tag` (the full `<...>`
/// text) and wrap unquoted attribute values in double quotes.
///
/// Comments, doctypes, processing instructions and anything else that does
/// not start with a letter after `<` or `</` are returned untouched, as are
/// quoted attribute values.
pub(crate) fn canonicalize_tag(tag: &str) -> Cow<'_, str> {
    let Some(inner) = tag.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
        return Cow::Borrowed(tag);
    };
    let (closing, body) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Cow::Borrowed(tag);
    }

    let name_len = body
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(body.len());
    let (name, rest) = body.split_at(name_len);

    let mut out = String::with_capacity(tag.len() + 4);
    out.push('<');
    if closing {
        out.push('/');
    }
    out.push_str(&name.to_ascii_lowercase());
    write_attributes(rest, &mut out);
    out.push('>');

    if out == tag {
        Cow::Borrowed(tag)
    } else {
        Cow::Owned(out)
    }
}

fn write_attributes(rest: &str, out: &mut String) {
    let mut chars = rest.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() || c == '/' {
            out.push(c);
            chars.next();
            continue;
        }

        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '=' || c == '/' {
                break;
            }
            out.push(c.to_ascii_lowercase());
            chars.next();
        }

        let gap = take_whitespace(&mut chars);
        if chars.peek() != Some(&'=') {
            out.push_str(&gap);
            continue;
        }
        out.push_str(&gap);
        out.push('=');
        chars.next();
        out.push_str(&take_whitespace(&mut chars));
        write_value(&mut chars, out);
    }
}

fn write_value(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    match chars.peek().copied() {
        Some(quote @ ('"' | '\'')) => {
            out.push(quote);
            chars.next();
            for c in chars.by_ref() {
                out.push(c);
                if c == quote {
                    break;
                }
            }
        }
        Some(_) => {
            let mut value = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                value.push(c);
                chars.next();
            }
            // `<img src=a.png/>`: the slash closes the tag, it is not part of
            // the value.
            let self_closing = chars.peek().is_none() && value.len() > 1 && value.ends_with('/');
            if self_closing {
                value.pop();
            }
            out.push('"');
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
            if self_closing {
                out.push('/');
            }
        }
        None => {}
    }
}

fn take_whitespace(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ws = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_whitespace() {
            break;
        }
        ws.push(c);
        chars.next();
    }
    ws
}
