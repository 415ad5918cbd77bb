use cinedex_catalog::{MovieFilter, MovieQuery, Person};
use cinedex_db::{CatalogStore, SqliteCatalog};
use regex::Regex;

use super::*;
use crate::input::ReaderLines;

fn store_with(people: &[(&str, &str)]) -> SqliteCatalog {
    let store = SqliteCatalog::open_memory().unwrap();
    for (name, nationality) in people {
        store.insert_person(&Person::new(*name, *nationality)).unwrap();
    }
    store
}

fn titanic_cast() -> SqliteCatalog {
    store_with(&[
        ("James Cameron", "Canadian"),
        ("Leonardo DiCaprio", "American"),
        ("Kate Winslet", "British"),
    ])
}

/// Run the whole workflow over scripted input, returning the result and output.
fn run(store: &SqliteCatalog, script: &str) -> (Result<(), ShellError>, String) {
    let mut input = ReaderLines::new(script.as_bytes());
    let mut out = Vec::new();
    let result = add_movie(store, &mut input, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn states_advance_in_order() {
    let store = titanic_cast();
    let mut flow = AddMovie::new();
    let mut out = Vec::new();

    assert_eq!(flow.state(), &AddMovieState::AwaitTitle);
    assert_eq!(flow.prompt(), Some("Title: "));

    flow.advance("Titanic", &store, &mut out).unwrap();
    assert_eq!(
        flow.state(),
        &AddMovieState::AwaitDuration {
            title: "Titanic".to_string()
        }
    );
    assert_eq!(flow.prompt(), Some("Length: "));

    flow.advance("03:14:00", &store, &mut out).unwrap();
    assert_eq!(
        flow.state(),
        &AddMovieState::AwaitDirector {
            title: "Titanic".to_string(),
            length_in_seconds: 11640
        }
    );
    assert_eq!(flow.prompt(), Some("Director: "));

    flow.advance("James Cameron", &store, &mut out).unwrap();
    assert!(matches!(flow.state(), AddMovieState::AwaitActors { .. }));
    assert_eq!(flow.prompt(), None);

    flow.advance("Kate Winslet", &store, &mut out).unwrap();
    flow.advance("EXIT", &store, &mut out).unwrap();
    assert!(flow.is_done());

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Starring:\nMovie \"Titanic\" has been added.\n"
    );
}

#[test]
fn titanic_scenario() {
    let store = titanic_cast();
    let (result, output) = run(
        &store,
        "Titanic\n03:14:00\nJames Cameron\nLeonardo DiCaprio\nKate Winslet\nexit\n",
    );
    result.unwrap();

    assert_eq!(
        output,
        "Title: Length: Director: Starring:\nMovie \"Titanic\" has been added.\n"
    );

    let movies = store.list_movies(&MovieQuery::all()).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Titanic");
    assert_eq!(movies[0].director_name, "James Cameron");
    assert_eq!(movies[0].length_in_seconds, 11640);
    assert_eq!(
        store.actors_for_movie(movies[0].id).unwrap(),
        vec!["Leonardo DiCaprio", "Kate Winslet"]
    );
    assert_eq!(store.stats().unwrap().castings, 2);
}

#[test]
fn bad_length_reprompts() {
    let store = titanic_cast();
    let (result, output) = run(&store, "Titanic\n3h14\n03:14\n03:14:00\nJames Cameron\nexit\n");
    result.unwrap();

    assert_eq!(
        output,
        "Title: Length: - Bad input format (hh:mm:ss), try again!\n\
         Length: - Bad input format (hh:mm:ss), try again!\n\
         Length: Director: Starring:\n\
         Movie \"Titanic\" has been added.\n"
    );
}

#[test]
fn zero_length_reprompts_silently() {
    let store = titanic_cast();
    let (result, output) = run(&store, "Titanic\n00:00:00\n00:00:01\nJames Cameron\nexit\n");
    result.unwrap();

    assert!(output.starts_with("Title: Length: Length: Director: "));
    let movies = store.list_movies(&MovieQuery::all()).unwrap();
    assert_eq!(movies[0].length_in_seconds, 1);
}

#[test]
fn unknown_director_reprompts() {
    let store = store_with(&[("Known Director", "Country")]);
    let (result, output) = run(
        &store,
        "Unknown Movie\n01:30:00\nUnknown Director\nKnown Director\nexit\n",
    );
    result.unwrap();

    assert!(output.contains("- We could not find \"Unknown Director\", try again!\nDirector: "));
    assert!(output.ends_with("Movie \"Unknown Movie\" has been added.\n"));
}

#[test]
fn unknown_actor_is_skipped() {
    let store = titanic_cast();
    let (result, output) = run(
        &store,
        "Titanic\n03:14:00\nJames Cameron\nBilly Zane\nKate Winslet\nexit\n",
    );
    result.unwrap();

    assert!(output.contains("- We could not find \"Billy Zane\", try again!\n"));
    let movie = store.list_movies(&MovieQuery::all()).unwrap().remove(0);
    assert_eq!(store.actors_for_movie(movie.id).unwrap(), vec!["Kate Winslet"]);
}

#[test]
fn duplicate_movie_is_a_conflict() {
    let store = titanic_cast();
    run(&store, "Titanic\n03:14:00\nJames Cameron\nexit\n").0.unwrap();

    let (result, output) = run(&store, "Titanic\n01:00:00\nJames Cameron\n");
    let err = result.unwrap_err();
    assert!(matches!(err, ShellError::Conflict(_)));
    assert_eq!(
        err.to_string(),
        "Movie with the same title and director already exists."
    );
    assert!(!output.contains("Starring:"));
    assert_eq!(store.stats().unwrap().movies, 1);
}

#[test]
fn same_title_other_director_is_allowed() {
    let store = store_with(&[("Gus Van Sant", "American"), ("Alfred Hitchcock", "British")]);
    run(&store, "Psycho\n01:49:00\nAlfred Hitchcock\nexit\n").0.unwrap();
    run(&store, "Psycho\n01:45:00\nGus Van Sant\nexit\n").0.unwrap();

    let query = MovieQuery::all().with_filter(MovieFilter::Title(Regex::new("^Psycho$").unwrap()));
    assert_eq!(store.list_movies(&query).unwrap().len(), 2);
}

#[test]
fn input_ending_early_is_reported() {
    let store = titanic_cast();
    let (result, _) = run(&store, "Titanic\n03:14:00\n");
    assert!(matches!(result, Err(ShellError::InputClosed)));
    assert_eq!(store.stats().unwrap().movies, 0);
}

#[test]
fn answers_are_trimmed() {
    let store = titanic_cast();
    let (result, _) = run(&store, "  Titanic  \n 03:14:00 \n James Cameron \n Exit \n");
    result.unwrap();

    let movie = store.list_movies(&MovieQuery::all()).unwrap().remove(0);
    assert_eq!(movie.title, "Titanic");
    assert_eq!(movie.director_name, "James Cameron");
}
