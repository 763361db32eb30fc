use growvec::{GrowVec, GrowVecError};

#[test]
fn test_stack_push_operations() {
    let mut vec = GrowVec::new();

    assert!(vec.is_empty());

    vec.push("first");
    assert_eq!(vec.len(), 1);
    assert!(!vec.is_empty());

    vec.push("second");
    vec.push("third");
    assert_eq!(vec.len(), 3);

    assert_eq!(vec.get(0), Ok(&"first"));
    assert_eq!(vec.get(1), Ok(&"second"));
    assert_eq!(vec.get(2), Ok(&"third"));
}

#[test]
fn test_stack_last_operations() {
    let mut vec = GrowVec::new();

    assert_eq!(vec.last(), None);
    assert_eq!(vec.try_last(), Err(GrowVecError::EmptyContainer));

    vec.push("bottom");
    assert_eq!(vec.last(), Some(&"bottom"));
    assert_eq!(vec.try_last(), Ok(&"bottom"));

    vec.push("top");
    assert_eq!(vec.last(), Some(&"top"));

    // Peeking doesn't modify the stack
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_stack_lifo_order() {
    let mut vec = GrowVec::new();
    for i in 0..10 {
        vec.push(i);
    }

    for expected in (0..10).rev() {
        assert_eq!(vec.remove_last(), Ok(expected));
    }
    assert!(vec.is_empty());
    assert_eq!(vec.remove_last(), Err(GrowVecError::EmptyContainer));
}

#[test]
fn test_pop_matches_remove_last() {
    let mut vec = GrowVec::new();
    vec.push(42);
    vec.push(99);

    assert_eq!(vec.pop(), Some(99));
    assert_eq!(vec.len(), 1);
    assert_eq!(vec.get(0), Ok(&42));
    assert_eq!(vec.get(-1), Ok(&42));

    assert_eq!(vec.pop(), Some(42));
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_stack_interface_doesnt_break_vector_operations() {
    let mut vec = GrowVec::new();

    vec.push("stack1");
    vec.append("vector1");
    vec.push("stack2");

    assert_eq!(vec.to_text(), "[stack1, vector1, stack2]");
    assert_eq!(vec.pop(), Some("stack2"));
    assert_eq!(vec.remove_last(), Ok("vector1"));

    let collected: Vec<_> = vec.iter().collect();
    assert_eq!(collected, vec![&"stack1"]);
}

#[test]
fn test_clear_operation() {
    let mut vec = GrowVec::new();
    for i in 0..20 {
        vec.push(i);
    }
    assert_eq!(vec.capacity(), 32);

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 1);
    assert_eq!(vec.pop(), None);

    vec.push(7);
    assert_eq!(vec.last(), Some(&7));
}
