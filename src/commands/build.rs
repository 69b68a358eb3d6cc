//! `stitch build` command.

use std::path::Path;

use crate::assemble;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `build` command: one source with directives commented out.
///
/// # Errors
///
/// Returns an error string if resolution fails.
pub fn run(ctx: &ServiceContext, input: &Path, settings: &Settings) -> Result<String, String> {
    let ledger = super::resolve(ctx, input, settings)?;
    Ok(assemble::executable(&ledger, &settings.directive(), &settings.comment_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_comments_out_directives_in_dependency_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("a.swift.txt"), "import b.swift.txt\na file\n").unwrap();
        std::fs::write(dir.path().join("b.swift.txt"), "import nested/c.swift.txt\nb file\n")
            .unwrap();
        std::fs::write(dir.path().join("nested/c.swift.txt"), "c file\n").unwrap();

        let settings = Settings { suffix: ".swift.txt".into(), ..Settings::default() };
        let output =
            run(&ServiceContext::live(), &dir.path().join("a.swift.txt"), &settings).unwrap();

        assert_eq!(output, "c file\n\n// import nested/c.swift.txt\nb file\n\n// import b.swift.txt\na file\n");
    }

    #[test]
    fn build_uses_configured_comment_prefix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.lua"), "require util.lua\nmain()\n").unwrap();
        std::fs::write(dir.path().join("util.lua"), "function main() end\n").unwrap();

        let settings =
            Settings { keyword: "require".into(), suffix: ".lua".into(), comment_prefix: "--".into() };
        let output = run(&ServiceContext::live(), &dir.path().join("main.lua"), &settings).unwrap();

        assert_eq!(output, "function main() end\n\n-- require util.lua\nmain()\n");
    }
}
