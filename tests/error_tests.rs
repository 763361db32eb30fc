use growvec::{GrowVec, GrowVecError};

#[test]
fn test_error_get_on_empty() {
    let vec: GrowVec<i32> = GrowVec::new();

    assert_eq!(vec.get(0), Err(GrowVecError::IndexOutOfRange { index: 0 }));
    assert_eq!(
        vec.get(-1),
        Err(GrowVecError::IndexOutOfRange { index: -1 })
    );
}

#[test]
fn test_error_remove_on_empty() {
    let mut vec: GrowVec<i32> = GrowVec::new();

    assert_eq!(vec.remove_last(), Err(GrowVecError::EmptyContainer));
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_error_index_out_of_range_positive() {
    let mut vec = GrowVec::new();
    vec.append(1);

    assert_eq!(vec.get(1), Err(GrowVecError::IndexOutOfRange { index: 1 }));
}

#[test]
fn test_error_index_out_of_range_negative() {
    let mut vec = GrowVec::new();
    vec.append(1);

    assert_eq!(
        vec.get(-2),
        Err(GrowVecError::IndexOutOfRange { index: -2 })
    );
}

#[test]
fn test_error_carries_original_index() {
    let vec: GrowVec<u8> = (0..5).collect();

    for index in [5, 6, 100, isize::MAX, -6, -100, isize::MIN] {
        assert_eq!(vec.get(index), Err(GrowVecError::IndexOutOfRange { index }));
    }
}

#[test]
fn test_failed_operations_leave_state_unchanged() {
    let mut vec: GrowVec<u8> = (0..3).collect();

    assert!(vec.get(3).is_err());
    assert!(vec.get(-4).is_err());
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec.to_text(), "[0, 1, 2]");

    vec.clear();
    assert!(vec.remove_last().is_err());
    assert!(vec.remove_last().is_err());
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_error_messages_quality() {
    let vec: GrowVec<u8> = GrowVec::new();

    let message = format!("{}", vec.get(-7).unwrap_err());
    assert!(message.contains("Index out of range"));
    assert!(message.contains("-7"));

    let message = format!("{}", GrowVecError::EmptyContainer);
    assert!(message.contains("empty container"));
}

#[test]
fn test_error_types_implement_standard_traits() {
    let error = GrowVecError::EmptyContainer;

    let debug_str = format!("{:?}", error);
    assert!(!debug_str.is_empty());

    let cloned = error.clone();
    assert_eq!(error, cloned);
    assert_ne!(error, GrowVecError::IndexOutOfRange { index: 0 });

    let _: &dyn std::error::Error = &error;
}
