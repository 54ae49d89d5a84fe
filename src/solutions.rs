pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;

pub use day01::day1;
pub use day02::day2;
pub use day03::day3;
pub use day04::day4;
pub use day05::day5;
pub use day06::day6;
