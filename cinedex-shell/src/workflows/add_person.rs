use std::io::Write;

use cinedex_catalog::Person;
use cinedex_db::CatalogStore;

use super::prompt_line;
use crate::error::ShellError;
use crate::input::LineSource;

const CONTEXT: &str = "Error adding person";

/// Prompt for a name and nationality and add the person if the name is free.
pub fn add_person<S, L, W>(store: &S, input: &mut L, out: &mut W) -> Result<(), ShellError>
where
    S: CatalogStore + ?Sized,
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let name = prompt_line(input, out, "Name: ")?;
    let nationality = prompt_line(input, out, "Nationality: ")?;

    if store.person_exists(&name).map_err(ShellError::store(CONTEXT))? {
        return Err(ShellError::conflict(format!(
            "Person \"{}\" already exists.",
            name
        )));
    }

    store
        .insert_person(&Person::new(name.as_str(), nationality))
        .map_err(ShellError::store(CONTEXT))?;
    log::debug!("Added person {:?}", name);
    writeln!(out, "Person \"{}\" has been added.", name)?;
    Ok(())
}
