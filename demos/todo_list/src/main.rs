//! Todo List Example
//!
//! Declares todo actions in RON, builds a reducer for them, wraps it so a
//! reset action clears everything, and replays a scripted session.
//!
//! Set `RUST_LOG=debug` to see the builders log what they construct.

use sauce_core::{
    create_reducer, resettable_reducer, Action, Actions, Handlers, InitialState, Reducer, Value,
};
use sauce_script::Loader;
use std::error::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Todo {
    text: String,
    done: bool,
}

#[derive(Debug, Clone)]
struct TodoState {
    todos: Vec<Todo>,
    filter: String,
    ignored: usize,
}

impl InitialState for TodoState {}

fn qualified(actions: &Actions, name: &str) -> Result<String, Box<dyn Error>> {
    actions
        .type_of(name)
        .map(String::from)
        .ok_or_else(|| format!("action {} is not declared", name).into())
}

fn todo_reducer(actions: &Actions) -> Result<Reducer<TodoState>, Box<dyn Error>> {
    let initial = TodoState {
        todos: Vec::new(),
        filter: "all".to_string(),
        ignored: 0,
    };

    let handlers = Handlers::new()
        .on(qualified(actions, "addTodo")?, |mut state: TodoState, action: &Action| {
            state.todos.push(Todo {
                text: action.get("text").and_then(Value::as_str).unwrap_or_default().to_string(),
                done: action.get("done").and_then(Value::as_bool).unwrap_or(false),
            });
            state
        })
        .on(qualified(actions, "toggleTodo")?, |mut state: TodoState, action: &Action| {
            let index = action.get("index").and_then(Value::as_int);
            match index.and_then(|i| usize::try_from(i).ok()).and_then(|i| state.todos.get_mut(i)) {
                Some(todo) => todo.done = !todo.done,
                None => warn!(?index, "toggle for a missing todo"),
            }
            state
        })
        .on(qualified(actions, "setFilter")?, |mut state: TodoState, action: &Action| {
            if let Some(filter) = action.get("filter").and_then(Value::as_str) {
                state.filter = filter.to_string();
            }
            state
        })
        .on(qualified(actions, "clearDone")?, |mut state: TodoState, _: &Action| {
            state.todos.retain(|todo| !todo.done);
            state
        })
        .on_default(|mut state: TodoState, _: &Action| {
            state.ignored += 1;
            state
        });

    let reducer = create_reducer(initial, handlers)?;
    Ok(resettable_reducer(&qualified(actions, "resetAll")?)?.wrap(reducer))
}

fn print_state(state: &TodoState) {
    let visible: Vec<&Todo> = state
        .todos
        .iter()
        .filter(|todo| match state.filter.as_str() {
            "done" => todo.done,
            "open" => !todo.done,
            _ => true,
        })
        .collect();

    println!("  filter: {} ({} ignored actions)", state.filter, state.ignored);
    for todo in visible {
        println!("  [{}] {}", if todo.done { "x" } else { " " }, todo.text);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Sauce Todo List Example ===\n");

    let mut loader = Loader::new();
    loader.load_str(include_str!("actions.ron"))?;
    let actions = loader.build()?;

    for (name, qualified) in actions.types.iter() {
        info!(name, qualified, "action type");
    }

    let reducer = todo_reducer(&actions)?;

    let session = vec![
        actions.create("addTodo", &["write the reducer".into()]),
        actions.create("addTodo", &["test the reducer".into()]),
        actions.create("addTodo", &["ship it".into()]),
        actions.create("toggleTodo", &[0.into()]),
        actions.create("toggleTodo", &[7.into()]),
        Some(Action::new("someone/ELSE")),
        actions.create("setFilter", &[]),
    ];

    let mut state = reducer.reduce(None, None);
    for action in session.iter().flatten() {
        println!("-> {}", Value::Map(action.fields().clone()));
        state = reducer.reduce(Some(state), Some(action));
    }
    println!("\nAfter session:");
    print_state(&state);

    if let Some(clear) = actions.create("clearDone", &[]) {
        state = reducer.reduce(Some(state), Some(&clear));
    }
    println!("\nAfter clearing done todos:");
    print_state(&state);

    if let Some(reset) = actions.create("resetAll", &[]) {
        state = reducer.reduce(Some(state), Some(&reset));
    }
    println!("\nAfter reset:");
    print_state(&state);

    Ok(())
}
