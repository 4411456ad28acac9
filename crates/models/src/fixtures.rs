//! Shared fixtures mirroring the admin app's seed data, for store tests.

use crate::book::Book;
use crate::park::Park;

pub fn one_park() -> Vec<Park> {
    vec![Park {
        id: Some(1),
        name: "Anacapa Island".to_string(),
        address: "Channel Islands National Park, CA".to_string(),
        rating: "5".to_string(),
    }]
}

pub fn three_parks() -> Vec<Park> {
    vec![
        Park {
            id: Some(2),
            name: "Alameda Park".to_string(),
            address: "1400 Santa Barbara St, Santa Barbara, CA".to_string(),
            rating: "4".to_string(),
        },
        Park {
            id: Some(3),
            name: "Shoreline Park".to_string(),
            address: "Shoreline Dr, Santa Barbara, CA".to_string(),
            rating: "5".to_string(),
        },
        Park {
            id: Some(4),
            name: "Tucker's Grove".to_string(),
            address: "4800 Cathedral Oaks Rd, Santa Barbara, CA".to_string(),
            rating: "3".to_string(),
        },
    ]
}

pub fn one_book() -> Vec<Book> {
    vec![Book {
        id: Some(1),
        title: "Harry Potter".to_string(),
        author: "J.K. Rowling".to_string(),
        genre: "Fantasy".to_string(),
    }]
}

pub fn three_books() -> Vec<Book> {
    vec![
        Book {
            id: Some(2),
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            genre: "Fantasy".to_string(),
        },
        Book {
            id: Some(3),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            genre: "Fiction".to_string(),
        },
        Book {
            id: Some(4),
            title: "A Song of Ice and Fire".to_string(),
            author: "George R.R. Martin".to_string(),
            genre: "Fantasy".to_string(),
        },
    ]
}
