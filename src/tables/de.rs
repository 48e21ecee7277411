//! German override table.
//!
//! Maintained in full; the totality test in the parent module fails when a
//! registry code is added without its German wording.

use crate::catalog::MessageEntry;
use crate::definitions::*;

/// German message templates.
pub static MESSAGES: &[MessageEntry] = &[
    // General conditions
    (&GENERAL_ERROR, "Allgemeiner Fehler: {0}"),
    (&UNSUPPORTED_FEATURE, "Funktion wird nicht unterstützt: {0}"),
    // Connection
    (&CONNECTION_REFUSED, "Verbindung abgelehnt: {0}"),
    (&CONNECTION_CLOSED, "Verbindung ist geschlossen."),
    (&CONNECTION_LOST, "Verbindung verloren: {0}"),
    (&COMMUNICATION_FAILURE, "Fehler der Kommunikationsverbindung."),
    // Authorization
    (&INVALID_CREDENTIALS, "Ungültige Autorisierungsangaben für Benutzer {0}."),
    (&ACCESS_DENIED, "Benutzer fehlt das Recht {0} für Objekt {1}."),
    // Statements and schema objects
    (&SYNTAX_ERROR, "Syntaxfehler bei oder nahe {0}."),
    (&TABLE_NOT_FOUND, "Tabelle nicht gefunden: {0}"),
    (&TABLE_ALREADY_EXISTS, "Tabelle existiert bereits: {0}"),
    (&COLUMN_NOT_FOUND, "Spalte nicht gefunden: {0}"),
    (&COLUMN_ALREADY_EXISTS, "Spalte existiert bereits: {0}"),
    (&INDEX_NOT_FOUND, "Index nicht gefunden: {0}"),
    (&AMBIGUOUS_COLUMN, "Spaltenreferenz {0} ist mehrdeutig."),
    (&FUNCTION_NOT_FOUND, "Funktion {0} mit {1} Argumenten existiert nicht."),
    (&WRONG_OBJECT_TYPE, "{0} hat nicht den erwarteten Objekttyp."),
    // Data exceptions
    (&DIVISION_BY_ZERO, "Division durch Null."),
    (&NUMERIC_OVERFLOW, "Numerischer Wert außerhalb des Wertebereichs: {0}"),
    (&STRING_TRUNCATION, "Zeichenkette überschreitet die Spaltenlänge {0}."),
    (&INVALID_DATETIME, "Ungültiges Datums-/Zeitformat: {0}"),
    (&INVALID_CAST, "{0} kann nicht in den Typ {1} umgewandelt werden."),
    (&NULL_VALUE_NOT_ALLOWED, "Nullwert nicht zulässig."),
    // Integrity constraints
    (&NOT_NULL_VIOLATION, "Spalte {0} akzeptiert keine Nullwerte."),
    (&FOREIGN_KEY_VIOLATION, "Fremdschlüssel-Constraint {0} durch Zeile in Tabelle {1} verletzt."),
    (&UNIQUE_VIOLATION, "Unique-Constraint {0} verletzt: doppelter Wert {1}."),
    (&CHECK_VIOLATION, "Check-Constraint {0} verletzt."),
    // Transactions
    (&INVALID_TRANSACTION_STATE, "Operation ist im aktuellen Transaktionszustand nicht erlaubt."),
    (&READ_ONLY_TRANSACTION, "Datenänderung ist in einer Nur-Lese-Transaktion nicht erlaubt."),
    (&SERIALIZATION_FAILURE, "Serialisierungsfehler der Transaktion; Transaktion wiederholen."),
    (&STATEMENT_ROLLED_BACK, "Anweisung wurde zurückgerollt: {0}"),
    // Parameters and cursors
    (&PARAM_IDX_OUT_RANGE, "Parameterindex {0} außerhalb des gültigen Bereichs. Der Wert muss zwischen 1 und {1} liegen."),
    (&PARAM_COUNT_MISMATCH, "Anweisung erwartet {0} Parameter, {1} wurden übergeben."),
    (&CURSOR_NOT_OPEN, "Cursor ist nicht geöffnet."),
    (&INVALID_CURSOR_NAME, "Ungültiger Cursorname: {0}"),
    // Resources and storage
    (&OUT_OF_MEMORY, "Nicht genügend Speicher beim Ausführen der Anweisung."),
    (&DISK_FULL, "Speicherplatz auf Gerät {0} erschöpft."),
    (&STATEMENT_TIMEOUT, "Anweisung nach {0} ms abgebrochen."),
    (&LOCK_TIMEOUT, "Zeitüberschreitung beim Warten auf Sperre für {0}."),
    (&IO_ERROR, "Ein-/Ausgabefehler beim Zugriff auf {0}."),
    (&DATA_CORRUPT, "Datendatei ist beschädigt: {0}"),
];
