#[cfg(test)]
mod common;

#[cfg(test)]
mod active_route_tests;

#[cfg(test)]
mod dismissal_scenario_tests;

#[cfg(test)]
mod disclosure_tests;

#[cfg(test)]
mod persistence_tests;
