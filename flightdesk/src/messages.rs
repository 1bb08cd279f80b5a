//! Banner text for the welcome, error, and goodbye screens.

pub const WELCOME: &str = "\
+----------------------------------------------------------+\n\
|                  Hello and welcome!                      |\n\
|  In order to register please fill in the fields below    |\n\
+----------------------------------------------------------+\n";

pub const ERROR: &str = "\
+----------------------------------------------------------+\n\
|     There was an error in at least one of the fields!    |\n\
|                Please correct the error(s)               |\n\
+----------------------------------------------------------+\n";

pub const GOODBYE: &str = "\
+----------------------------------------------------------+\n\
|                      Thank you!                          |\n\
|               This is the data you sent:                 |\n\
+----------------------------------------------------------+\n";
