pub mod close_objects;
pub mod nearest_neighbour;
