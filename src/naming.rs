//! Download file-name helpers.

/// Replace the extension of `name` with `ext`.
///
/// Everything from the last `.` is replaced; a name without a `.` gets `ext`
/// appended. `ext` includes its leading dot: `with_extension("zelda.eep", ".srm")`
/// gives `"zelda.srm"`.
pub fn with_extension(name: &str, ext: &str) -> String {
    let stem_end = name.rfind('.').unwrap_or(name.len());
    let mut renamed = String::with_capacity(stem_end + ext.len());
    renamed.push_str(&name[..stem_end]);
    renamed.push_str(ext);
    renamed
}
