//! Built-in Symphony code tables.
//!
//! The production tables shipped with a Symphony installation run to several
//! hundred command codes and well over a thousand data codes; this module
//! embeds the commonly observed subset so the tool works with zero
//! configuration. Site-specific table files merge over these entries at
//! startup (see [`crate::tables::CodeTables`]), with the same normalisation
//! applied either way.
//!
//! Values are stored here in their raw display form; folding happens when
//! the tables are built.

/// Two-character command tag → transaction name.
pub(crate) const COMMAND_CODES: &[(&str, &str)] = &[
    ("AV", "Add Volume"),
    ("AZ", "Add Call Number"),
    ("Av", "Add Vendor"),
    ("BI", "Bill User"),
    ("CA", "Cancel Hold"),
    ("CB", "Copy Bib"),
    ("CI", "Checkin Item"),
    ("CR", "Credit User"),
    ("CT", "Change Item ID"),
    ("CV", "Charge Item"),
    ("Cd", "Cancel Distribution"),
    ("DI", "Display Item"),
    ("DU", "Display User"),
    ("EB", "Edit Bill"),
    ("EC", "Edit Copy"),
    ("EI", "Edit Item"),
    ("EV", "Discharge Item"),
    ("Ed", "Edit Distribution"),
    ("FA", "Place Blanket Hold"),
    ("FR", "Mark Item Missing"),
    ("Fl", "Mark Item Lost"),
    ("HD", "Display Hold"),
    ("HF", "Reorder Hold Queue"),
    ("HZ", "Remove Hold"),
    ("IV", "Inventory Item"),
    ("JB", "Suspend Hold"),
    ("JD", "Unsuspend Hold"),
    ("JZ", "Create Hold"),
    ("Jh", "Modify Hold"),
    ("LD", "Display Charge"),
    ("MR", "Mark Item Used"),
    ("NB", "Add Brief Title"),
    ("PC", "Pay Bill"),
    ("PG", "Purge User"),
    ("PV", "Renew Privilege"),
    ("RF", "Refund User"),
    ("RT", "Receive Transit"),
    ("RV", "Renew Item"),
    ("Rb", "Rebuild Hold Queue"),
    ("SG", "Change User ID"),
    ("SI", "Ship Item"),
    ("TB", "Transfer Bill"),
    ("TI", "Transit Item"),
    ("Tr", "Trap Hold"),
    ("UR", "Register New User"),
    ("US", "Suspend User"),
    ("UX", "Unsuspend User"),
    ("V1", "Create User Part A"),
    ("V2", "Create User Part B"),
    ("V3", "Edit User Part A"),
    ("V4", "Edit User Part B"),
    ("VB", "Modify Bib"),
    ("VC", "Modify Copy"),
    ("VD", "Remove Copy"),
    ("VI", "Modify Item"),
    ("VR", "Remove Bib"),
    ("Vd", "Remove Distribution"),
    ("WA", "Waive Bill"),
    ("WB", "Write Off Bill"),
    ("XC", "Remove Charge History"),
    ("XU", "Remove User"),
    ("YB", "Pay Bill By Credit"),
    ("ZB", "Display Bill"),
    ("Zu", "Merge User"),
    ("aa", "Assume Lost"),
    ("cf", "Claims Returned"),
    ("dv", "Display Volume"),
    ("ev", "Discharge Item Bookdrop"),
    ("hv", "Place Volume Hold"),
    ("iv", "Item Inquiry"),
    ("jz", "Place Copy Hold"),
    ("rv", "Renew Item Seen"),
    ("uR", "Update User Registration"),
    ("xx", "Unused Command"),
];

/// Two-character data tag → field display name.
///
/// Folded to record-key form (`Item ID` → `item_id`) when the tables are
/// built, so lookups during decoding never re-normalise.
pub(crate) const DATA_CODES: &[(&str, &str)] = &[
    // station / envelope fields
    ("FF", "Station Login"),
    ("FE", "Station Library"),
    ("FW", "Station Login Library"),
    ("Fc", "Station Login Clearance"),
    ("FG", "Station User Access"),
    ("FT", "Station Terminal"),
    // item identity
    ("NQ", "Item ID"),
    ("NR", "New Item ID"),
    ("NS", "Item Type"),
    ("IA", "Item Category One"),
    ("IB", "Item Category Two"),
    ("IC", "Item Category Three"),
    ("ID", "Item Category Four"),
    ("IE", "Item Category Five"),
    ("IK", "Current Location"),
    ("IL", "Home Location"),
    ("IN", "Item Number Of Pieces"),
    ("IP", "Item Price"),
    ("IQ", "Call Number"),
    ("IS", "Copy Number"),
    ("IU", "Accountability"),
    ("IY", "Permanent Flag"),
    ("tJ", "Catalog Key Number"),
    ("tL", "Call Sequence Number"),
    ("tM", "Copy Key Number"),
    ("tP", "Title Control Number"),
    // user identity
    ("UO", "User ID"),
    ("UP", "New User ID"),
    ("Uf", "User PIN"),
    ("UA", "User Alternative ID"),
    ("UB", "User Category One"),
    ("UC", "User Category Two"),
    ("UE", "User Category Three"),
    ("UF", "User Category Four"),
    ("UG", "User Category Five"),
    ("UH", "User Profile"),
    ("UJ", "User Status"),
    ("UL", "User Library"),
    ("UM", "User Name"),
    ("UN", "User First Name"),
    ("UQ", "User Middle Name"),
    ("UR", "User Last Name"),
    ("US", "User Suffix"),
    ("UT", "User Title"),
    ("UV", "User Preferred Name"),
    ("UX", "User Language"),
    // dates
    ("UK", "User Last Activity"),
    ("UD", "Date Privilege Granted"),
    ("UW", "Date Privilege Expires"),
    ("UZ", "Birth Year"),
    ("CO", "Date of Discharge"),
    ("CC", "Date of Charge"),
    ("CD", "Date Due"),
    ("CE", "Date Renewed"),
    ("CF", "Date Recalled"),
    ("CG", "Date Claims Returned"),
    ("HA", "Date Hold Placed"),
    ("HB", "Date Hold Expires"),
    ("HC", "Date Hold Suspended"),
    ("HD", "Date Hold Unsuspended"),
    ("HT", "Date Hold Trapped"),
    ("RD", "Date Received"),
    ("SD", "Date Shipped"),
    ("XD", "Date Created"),
    ("XE", "Date Modified"),
    ("bD", "Date Billed"),
    ("pD", "Date Paid"),
    // holds
    ("HE", "Hold Level"),
    ("HG", "Hold Status"),
    ("HH", "Hold Queue Position"),
    ("HI", "Hold Inactive Reason"),
    ("HK", "Hold Range"),
    ("HL", "Hold Queue Length"),
    ("HM", "Hold Mailed Flag"),
    ("HN", "Hold Number Of Notices"),
    ("HO", "Hold Pickup Library"),
    ("HP", "Hold Placed Library"),
    ("HR", "Hold Recall Status"),
    ("HS", "Hold Override"),
    ("Hk", "Hold Key"),
    // circulation
    ("CH", "Charge Override"),
    ("CK", "Charge Key"),
    ("CL", "Charge Library"),
    ("CM", "Circulation Rule"),
    ("CN", "Charge Number Of Renewals"),
    ("CP", "Charge Number Overdue"),
    ("CQ", "Renewal Type"),
    ("CR", "Recall Status"),
    ("CS", "Charge Status"),
    ("dC", "Client Type"),
    ("dD", "Discharge Library"),
    ("dT", "Transaction Tracker"),
    // bills and payments
    ("BA", "Bill Amount"),
    ("BB", "Bill Balance"),
    ("BC", "Bill Reason"),
    ("BD", "Bill Library"),
    ("BE", "Bill Number"),
    ("BF", "Payment Type"),
    ("BG", "Payment Amount"),
    ("BH", "Bill Tax Amount"),
    ("BI", "Bill Item ID"),
    // transits
    ("TA", "Transit Status"),
    ("TB", "Transit Reason"),
    ("TC", "Transit Date"),
    ("TD", "Transit Item ID"),
    ("nu", "Transit To Library"),
    ("nv", "Transit From Library"),
    ("nw", "Transit Via Route"),
    // bibliographic
    ("TG", "Title"),
    ("TH", "Author"),
    ("TN", "Title Key"),
    ("VA", "Volume Number"),
    ("VN", "Vendor Number"),
    ("e$", "Entry Text"),
    ("eA", "Entry ID"),
    ("eB", "Entry Occurrence"),
    // notices and notifications
    ("MA", "Notice Type"),
    ("MB", "Notice Count"),
    ("MC", "Notify Via"),
    ("ME", "User Email"),
    ("MP", "User Phone"),
    // environment
    ("EN", "Environment"),
    ("LA", "Language Code"),
    ("OM", "Override Mask"),
    ("PA", "Privilege Number"),
    ("PB", "Privilege Override"),
    ("PW", "Privilege Password"),
    ("RQ", "Request Type"),
    ("SL", "Selection Criteria"),
    ("SR", "Sort Routine"),
    ("Ss", "Session ID"),
    ("WL", "Workstation Library"),
    ("ZA", "Access Point"),
    ("ZB", "User Access"),
    ("zA", "Report Name"),
    ("zB", "Report Count"),
];

/// Numeric client id → client software name.
///
/// Matches the hold-client table shipped with the ILS; a site file loaded
/// with `--clients` merges over these.
pub(crate) const CLIENT_TYPES: &[(&str, &str)] = &[
    ("0", "CLIENT_UNKNOWN"),
    ("1", "CLIENT_3M_SERVER"),
    ("2", "CLIENT_WORKFLOWS"),
    ("3", "CLIENT_INFOVIEW"),
    ("4", "CLIENT_SYMWS"),
    ("5", "CLIENT_ONLINE_CATALOG"),
    ("6", "CLIENT_SIP2"),
    ("7", "CLIENT_NCIP"),
    ("8", "CLIENT_SVA"),
    ("9", "CLIENT_POCKET_CIRC"),
    ("10", "CLIENT_WEB_STAFF"),
    ("11", "CLIENT_BOOKMYNE"),
    ("12", "CLIENT_MOBILE_CIRC"),
    ("13", "CLIENT_SOCIAL_LIBRARY"),
    ("14", "CLIENT_ERC"),
    ("15", "CLIENT_ILL"),
    ("16", "CLIENT_SELFCHECK"),
    ("17", "CLIENT_API_SERVER"),
    ("18", "CLIENT_DIRECTORS_STATION"),
    ("19", "CLIENT_WEB_SERVICES"),
    ("20", "CLIENT_ENTERPRISE"),
    ("21", "CLIENT_MOBILE_STAFF"),
    ("22", "CLIENT_UNASSIGNED"),
];
