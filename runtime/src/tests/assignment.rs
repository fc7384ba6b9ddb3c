use crate::*;
use quranshare_common::*;

fn readers(count: usize) -> Vec<Reader> {
    initial_readers(count, &Catalog::new())
}

fn section(index: SectionId) -> Section {
    Catalog::new().section(index).unwrap().clone()
}

fn counts(readers: &[Reader], section: SectionId) -> Vec<usize> {
    readers
        .iter()
        .map(|r| r.assignment(section).unwrap().page_count)
        .collect()
}

fn pages(readers: &[Reader], section: SectionId) -> Vec<Vec<PageNumber>> {
    readers
        .iter()
        .map(|r| r.assignment(section).unwrap().pages.clone())
        .collect()
}

#[test]
fn first_section_between_four_readers() {
    let result = assign(readers(4), &section(1)).unwrap();

    assert_eq!(counts(&result, 1), vec![6, 5, 5, 5]);
    assert_eq!(
        pages(&result, 1),
        vec![
            (1..=6).collect::<Vec<PageNumber>>(),
            (7..=11).collect(),
            (12..=16).collect(),
            (17..=21).collect(),
        ]
    );
}

#[test]
fn last_section_between_five_readers() {
    let result = assign(readers(5), &section(30)).unwrap();

    assert_eq!(counts(&result, 30), vec![5, 5, 5, 4, 4]);
    assert_eq!(
        pages(&result, 30),
        vec![
            (582..=586).collect::<Vec<PageNumber>>(),
            (587..=591).collect(),
            (592..=596).collect(),
            (597..=600).collect(),
            (601..=604).collect(),
        ]
    );
}

#[test]
fn zero_readers_is_invalid() {
    let result = assign(Vec::new(), &section(1));
    assert!(matches!(result, Err(RuntimeError::InvalidArgument { .. })));

    let result = assign_all(Vec::new(), Catalog::new().sections());
    assert!(matches!(result, Err(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn more_readers_than_pages_leaves_some_empty() {
    let short = Section {
        index: 1,
        start_page: 1,
        end_page: 3,
        pages: vec![1, 2, 3],
    };
    let result = assign(readers(5), &short).unwrap();

    assert_eq!(counts(&result, 1), vec![1, 1, 1, 0, 0]);
    assert_eq!(pages(&result, 1)[4], Vec::<PageNumber>::new());
}

#[test]
fn assign_only_touches_the_given_section() {
    let mut named = readers(2);
    named[0].name = "Ali".to_string();
    named[1].name = "Ben".to_string();

    let result = assign(named, &section(2)).unwrap();

    assert_eq!(result[0].name, "Ali");
    assert_eq!(result[1].name, "Ben");
    assert_eq!(result[0].assignment(2).unwrap().pages, (22..=31).collect::<Vec<PageNumber>>());
    for reader in &result {
        for (id, assignment) in &reader.assignments {
            if *id != 2 {
                assert!(assignment.is_empty());
            }
        }
    }
}

#[test]
fn readers_are_visited_by_id() {
    let mut shuffled = readers(3);
    shuffled.reverse();

    let result = assign(shuffled, &section(1)).unwrap();

    let ids: Vec<ReaderId> = result.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(result[0].assignment(1).unwrap().pages, (1..=7).collect::<Vec<PageNumber>>());
}

#[test]
fn every_reader_count_splits_every_section_evenly() {
    let catalog = Catalog::new();

    for n in 1..=MAX_READERS {
        let result = assign_all(readers(n), catalog.sections()).unwrap();

        for section in catalog.sections() {
            let section_counts = counts(&result, section.index);
            assert_eq!(section_counts.iter().sum::<usize>(), section.total_pages());

            let max = section_counts.iter().max().unwrap();
            let min = section_counts.iter().min().unwrap();
            assert!(max - min <= 1, "n={} section={}", n, section.index);

            let joined: Vec<PageNumber> = pages(&result, section.index).concat();
            assert_eq!(joined, section.pages, "n={} section={}", n, section.index);
        }
    }
}

#[test]
fn recalculating_gives_the_same_result() {
    let catalog = Catalog::new();
    let once = assign_all(readers(7), catalog.sections()).unwrap();
    let twice = assign_all(once.clone(), catalog.sections()).unwrap();
    assert_eq!(once, twice);
}
