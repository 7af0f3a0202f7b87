use crate::error::KeyPathNotFound;

use super::Styleable;

/// Resolves a dotted `path` to a sub-object of `object`.
///
/// Each segment is looked up in the object's declared children first; when
/// the segment is not declared, the whole remaining path is handed to the
/// object's dynamic lookup, if it has one. Empty optional children never
/// resolve.
pub fn locate<'a>(
    path: &str,
    object: &'a mut dyn Styleable,
) -> Result<&'a mut dyn Styleable, KeyPathNotFound> {
    let type_name = object.type_name();
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    let not_found = || KeyPathNotFound {
        segment: head.to_owned(),
        path: path.to_owned(),
        type_name,
    };

    if object.is_empty() {
        return Err(not_found());
    }

    if object.child_names().contains(&head) {
        let child = object.child_mut(head).ok_or_else(not_found)?;
        return match rest {
            Some(rest) => locate(rest, child),
            None if child.is_empty() => Err(KeyPathNotFound {
                segment: head.to_owned(),
                path: path.to_owned(),
                type_name: child.type_name(),
            }),
            None => Ok(child),
        };
    }

    match object.dynamic_lookup() {
        Some(dynamic) => dynamic.value_for_key_path(path).ok_or_else(not_found),
        None => Err(not_found()),
    }
}
