#[cfg(test)]
mod common;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod task_tests;

#[cfg(test)]
mod fixture_tests;
