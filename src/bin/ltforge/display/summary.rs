use std::io::{self, Write};

use lt_forge::{DataFragment, MoleculeTemplate};

pub fn print_template_summary(template: &MoleculeTemplate) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "  Template: {}", template.name);
    let _ = writeln!(stderr, "      Sites          {:>6}", template.site_count());
    let _ = writeln!(
        stderr,
        "      Atom types     {:>6}",
        template.type_tags().len()
    );
    let _ = writeln!(
        stderr,
        "      Pair coeffs    {:>6}",
        template.pair_coeffs.len()
    );
    if !template.groups.is_empty() {
        let names = template
            .groups
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(stderr, "      Groups          {}", names);
    }
    let _ = writeln!(stderr);
}

pub fn print_fragment_summary(fragment: &DataFragment) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "  Instantiated fragment:");
    let _ = writeln!(stderr, "      Atoms          {:>6}", fragment.atom_count());
    let _ = writeln!(
        stderr,
        "      Molecules      {:>6}",
        fragment.molecule_count()
    );
    let _ = writeln!(stderr, "      Atom types     {:>6}", fragment.type_count());
    let _ = writeln!(stderr);
}
