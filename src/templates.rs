//! Embedded script templates.

/// sbatch script template for cross-validation batch jobs.
pub static CROSS_VALIDATION_SBATCH: &str = include_str!("templates/cross_validation.sbatch.j2");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_not_empty() {
        assert!(!CROSS_VALIDATION_SBATCH.is_empty());
    }

    #[test]
    fn template_declares_sbatch_directives() {
        for directive in ["#SBATCH -A", "#SBATCH -J", "#SBATCH -t", "#SBATCH --mail-user"] {
            assert!(
                CROSS_VALIDATION_SBATCH.contains(directive),
                "template should contain '{}'",
                directive
            );
        }
    }

    #[test]
    fn template_keeps_literal_shell_variables() {
        assert!(CROSS_VALIDATION_SBATCH.contains("${HEAP_SIZE}"));
        assert!(CROSS_VALIDATION_SBATCH.contains("${CLASSPATH_JARFILE}"));
    }
}
