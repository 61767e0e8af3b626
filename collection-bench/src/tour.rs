//! Standard-collection walkthrough.
//!
//! Each demonstration runs one container through the operation it is the
//! right tool for, on a handful of values. The demonstrations return plain
//! values; [`run`] prints them, and the tests assert on them directly.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

use dashmap::DashMap;

/// `BTreeMap` iterates in ascending key order no matter the insertion order.
fn scores_in_order() -> Vec<(u32, &'static str)> {
    let mut scores = BTreeMap::new();
    scores.insert(90, "Alice");
    scores.insert(70, "Bob");
    scores.insert(85, "Chris");

    scores.into_iter().collect()
}

/// `HashSet` keeps one copy per value; re-inserting a member changes nothing.
fn unique_emails() -> usize {
    let mut emails = HashSet::new();
    emails.insert("a@test.com");
    emails.insert("b@test.com");
    emails.insert("a@test.com");

    emails.len()
}

/// `VecDeque` hands work back first-in-first-out.
fn next_task() -> Option<&'static str> {
    let mut tasks = VecDeque::new();
    tasks.push_back("Task 1");
    tasks.push_back("Task 2");

    tasks.pop_front()
}

/// `Vec` push/pop is the idiomatic stack: the last saved state pops first.
fn undo_state() -> Option<&'static str> {
    let mut states = Vec::new();
    states.push("State 1");
    states.push("State 2");

    states.pop()
}

/// A graph as a map from node to neighbor list.
fn neighbors_of_a() -> Vec<&'static str> {
    let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
    graph.insert("A", vec!["B", "C"]);
    graph.insert("B", vec!["D"]);

    graph.get("A").cloned().unwrap_or_default()
}

/// `BinaryHeap` is a max-heap; wrapping entries in `Reverse` makes the
/// lowest priority value surface first.
fn next_priority_task() -> Option<&'static str> {
    let mut queue = BinaryHeap::new();
    queue.push(Reverse((3_u8, "Low Priority Task")));
    queue.push(Reverse((1, "High Priority Task")));

    queue.pop().map(|Reverse((_, task))| task)
}

/// Arrays answer positional access in constant time.
fn element_at_three() -> i32 {
    let numbers = [10, 20, 30, 40, 50];
    numbers[3]
}

/// Sorting once buys `binary_search` afterwards.
fn index_of_thirty() -> Result<usize, usize> {
    let mut values = vec![50, 10, 30, 20, 40];
    values.sort();

    values.binary_search(&30)
}

/// Middle insertion into a `LinkedList`: split at the insertion point, push
/// the new node, splice the tail back on. Both halves of the splice are
/// O(1) once the split point is reached.
fn playlist_order() -> Vec<&'static str> {
    let mut playlist = LinkedList::new();
    playlist.push_back("Song A");
    playlist.push_back("Song C");

    let mut tail = playlist.split_off(1);
    playlist.push_back("Song B");
    playlist.append(&mut tail);

    playlist.into_iter().collect()
}

/// One key, many values: `entry().or_default()` grows the group in place.
fn electronics_products() -> Vec<String> {
    let mut products: HashMap<String, Vec<String>> = HashMap::new();
    for item in ["Phone", "Laptop"] {
        products
            .entry("Electronics".to_string())
            .or_default()
            .push(item.to_string());
    }

    products.remove("Electronics").unwrap_or_default()
}

/// `DashMap` is the thread-safe map; a single insert-then-read shows the
/// access pattern without pretending to be a concurrency benchmark.
fn cached_value() -> Option<&'static str> {
    let cache = DashMap::new();
    cache.insert(1u32, "value");

    cache.get(&1).map(|entry| *entry.value())
}

/// Print every demonstration in order.
pub fn run() {
    println!();
    println!("=== Collection Tour ===");

    println!();
    println!("1) BTreeMap: keys iterate in sorted order");
    for (score, name) in scores_in_order() {
        println!("   {name} scored {score}");
    }

    println!();
    println!("2) HashSet: duplicates collapse");
    println!("   Total unique emails: {}", unique_emails());

    println!();
    println!("3) VecDeque: first in, first out");
    if let Some(task) = next_task() {
        println!("   Processing: {task}");
    }

    println!();
    println!("4) Vec as a stack: last in, first out");
    if let Some(state) = undo_state() {
        println!("   Undo: restore {state}");
    }

    println!();
    println!("5) HashMap<_, Vec<_>>: graph adjacency list");
    println!("   Neighbors of A: {}", neighbors_of_a().join(", "));

    println!();
    println!("6) BinaryHeap + Reverse: lowest priority value first");
    if let Some(task) = next_priority_task() {
        println!("   Next task: {task}");
    }

    println!();
    println!("7) Array: constant-time index access");
    println!("   Element at index 3: {}", element_at_three());

    println!();
    println!("8) Sorted Vec + binary_search");
    match index_of_thirty() {
        Ok(index) => println!("   Index of 30: {index}"),
        Err(_) => println!("   30 not present"),
    }

    println!();
    println!("9) LinkedList: insert in the middle");
    println!("   Playlist order: {}", playlist_order().join(" -> "));

    println!();
    println!("10) HashMap<_, Vec<_>>: one key, many values");
    println!("   Electronics: {}", electronics_products().join(", "));

    println!();
    println!("11) DashMap: thread-safe insert and read");
    if let Some(value) = cached_value() {
        println!("   Cache item 1: {value}");
    }

    println!();
}
