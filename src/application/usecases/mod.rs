pub mod change_seats;
