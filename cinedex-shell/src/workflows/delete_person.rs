use std::io::Write;

use cinedex_db::CatalogStore;

use crate::error::ShellError;

const CONTEXT: &str = "Error deleting person";

/// Delete a person who directs no movie, along with their castings.
///
/// The two deletes run in order with no transaction; if the second fails the
/// castings stay deleted.
pub fn delete_person<S, W>(store: &S, name: &str, out: &mut W) -> Result<(), ShellError>
where
    S: CatalogStore + ?Sized,
    W: Write + ?Sized,
{
    if !store.person_exists(name).map_err(ShellError::store(CONTEXT))? {
        return Err(ShellError::not_found(format!(
            "Person \"{}\" not found.",
            name
        )));
    }

    if store.is_director(name).map_err(ShellError::store(CONTEXT))? {
        return Err(ShellError::conflict(format!(
            "Cannot delete \"{}\" because they are a director of a movie.",
            name
        )));
    }

    let castings = store
        .delete_castings_for_actor(name)
        .map_err(ShellError::store(CONTEXT))?;
    store
        .delete_person(name)
        .map_err(ShellError::store(CONTEXT))?;
    log::debug!("Deleted person {:?} and {} casting(s)", name, castings);

    writeln!(out, "Person \"{}\" has been deleted.", name)?;
    Ok(())
}
