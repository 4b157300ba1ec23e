use stratego::{BitBoard, BitBoardError, CellMask};

#[test]
fn test_check_fits_sizes() {
    assert!(CellMask::check_fits(100).is_ok());
    assert!(CellMask::check_fits(128).is_ok());
    assert_eq!(
        CellMask::check_fits(144),
        Err(BitBoardError::SizeTooLarge {
            cells: 144,
            capacity: 128
        })
    );
    assert!(BitBoard::<u16>::check_fits(17).is_err());
}

#[test]
fn test_insert_contains_remove() {
    let mut mask = CellMask::new();
    assert!(mask.is_empty());

    mask.insert(0);
    mask.insert(99);
    assert!(mask.contains(0));
    assert!(mask.contains(99));
    assert_eq!(mask.count_ones(), 2);

    mask.remove(0);
    assert!(!mask.contains(0));
    assert_eq!(mask.count_ones(), 1);

    // past capacity is ignored rather than wrapping
    mask.insert(200);
    assert!(!mask.contains(200));
    assert_eq!(mask.count_ones(), 1);
}

#[test]
fn test_iter_ascending() {
    let mask: CellMask = [42, 3, 127, 0].into_iter().collect();
    let bits: Vec<_> = mask.iter().collect();
    assert_eq!(bits, vec![0, 3, 42, 127]);
}

#[test]
fn test_from_indices_rejects_out_of_range() {
    let ok = BitBoard::<u16>::from_indices([1, 15]).unwrap();
    assert_eq!(ok.count_ones(), 2);
    assert_eq!(
        BitBoard::<u16>::from_indices([1, 16]),
        Err(BitBoardError::IndexOutOfBounds { index: 16 })
    );
}

#[test]
fn test_full_and_set_ops() {
    let full = CellMask::full(10).unwrap();
    assert_eq!(full.count_ones(), 10);
    assert_eq!(CellMask::full(128).unwrap().count_ones(), 128);

    let evens: CellMask = (0..10).filter(|i| i % 2 == 0).collect();
    let odds = full - evens;
    assert_eq!(odds.iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    assert!((odds & evens).is_empty());
    assert_eq!(odds | evens, full);
    assert_eq!(!evens & full, odds);
}
