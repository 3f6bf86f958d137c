mod armed;
mod breakpoints;
mod common;
mod drawing;
mod group_move;
mod protocol;
