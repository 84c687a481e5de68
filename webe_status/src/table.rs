use crate::category::Category;
use crate::registry::StatusEntry;

// every registered status, ordered by code.
// lookups binary search on code, so keep new rows in order.
macro_rules! status_codes {
  (@deprecated deprecated) => { true };
  (@deprecated) => { false };
  (
    $( ($code:literal, $konst:ident, $phrase:literal, $reference:literal $(, $deprecated:ident)?); )+
  ) => {
    /// Symbolic names for every registered status code.
    pub mod code {
      $(
        #[doc = concat!($code, " ", $phrase)]
        pub const $konst: u16 = $code;
      )+
    }

    /// Canonical reason phrases, named the same as their codes.
    pub mod phrase {
      $(
        #[doc = concat!("Reason phrase for ", $code)]
        pub const $konst: &str = $phrase;
      )+
    }

    pub(crate) const ENTRIES: &[StatusEntry] = &[
      $(
        StatusEntry {
          code: $code,
          phrase: $phrase,
          category: derive_category($code),
          reference: $reference,
          deprecated: status_codes!(@deprecated $($deprecated)?),
        },
      )+
    ];
  };
}

// a code outside of 100-599 fails the build here
const fn derive_category(code: u16) -> Category {
  match Category::classify(code) {
    Some(category) => category,
    None => panic!("registered status code is outside of 100-599"),
  }
}

status_codes! {
  (100, CONTINUE, "Continue", "RFC 7231, Section 6.2.1");
  (101, SWITCHING_PROTOCOLS, "Switching Protocols", "RFC 7231, Section 6.2.2");
  (102, PROCESSING, "Processing", "RFC 2518, Section 10.1");
  (103, EARLY_HINTS, "Early Hints", "RFC 8297");

  (200, OK, "OK", "RFC 7231, Section 6.3.1");
  (201, CREATED, "Created", "RFC 7231, Section 6.3.2");
  (202, ACCEPTED, "Accepted", "RFC 7231, Section 6.3.3");
  (203, NON_AUTHORITATIVE_INFORMATION, "Non-Authoritative Information", "RFC 7231, Section 6.3.4");
  (204, NO_CONTENT, "No Content", "RFC 7231, Section 6.3.5");
  (205, RESET_CONTENT, "Reset Content", "RFC 7231, Section 6.3.6");
  (206, PARTIAL_CONTENT, "Partial Content", "RFC 7233, Section 4.1");
  (207, MULTI_STATUS, "Multi-Status", "RFC 2518, Section 10.2");
  (208, ALREADY_REPORTED, "Already Reported", "RFC 5842, Section 7.1");
  (226, IM_USED, "IM Used", "RFC 3229, Section 10.4.1");

  (300, MULTIPLE_CHOICES, "Multiple Choices", "RFC 7231, Section 6.4.1");
  (301, MOVED_PERMANENTLY, "Moved Permanently", "RFC 7231, Section 6.4.2");
  (302, MOVED_TEMPORARILY, "Moved Temporarily", "RFC 7231, Section 6.4.3");
  (303, SEE_OTHER, "See Other", "RFC 7231, Section 6.4.4");
  (304, NOT_MODIFIED, "Not Modified", "RFC 7232, Section 4.1");
  (305, USE_PROXY, "Use Proxy", "RFC 7231, Section 6.4.6", deprecated);
  (307, TEMPORARY_REDIRECT, "Temporary Redirect", "RFC 7231, Section 6.4.7");
  (308, PERMANENT_REDIRECT, "Permanent Redirect", "RFC 7538, Section 3");

  (400, BAD_REQUEST, "Bad Request", "RFC 7231, Section 6.5.1");
  (401, UNAUTHORIZED, "Unauthorized", "RFC 7235, Section 3.1");
  (402, PAYMENT_REQUIRED, "Payment Required", "RFC 7231, Section 6.5.2");
  (403, FORBIDDEN, "Forbidden", "RFC 7231, Section 6.5.3");
  (404, NOT_FOUND, "Not Found", "RFC 7231, Section 6.5.4");
  (405, METHOD_NOT_ALLOWED, "Method Not Allowed", "RFC 7231, Section 6.5.5");
  (406, NOT_ACCEPTABLE, "Not Acceptable", "RFC 7231, Section 6.5.6");
  (407, PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required", "RFC 7235, Section 3.2");
  (408, REQUEST_TIMEOUT, "Request Timeout", "RFC 7231, Section 6.5.7");
  (409, CONFLICT, "Conflict", "RFC 7231, Section 6.5.8");
  (410, GONE, "Gone", "RFC 7231, Section 6.5.9");
  (411, LENGTH_REQUIRED, "Length Required", "RFC 7231, Section 6.5.10");
  (412, PRECONDITION_FAILED, "Precondition Failed", "RFC 7232, Section 4.2");
  (413, REQUEST_ENTITY_TOO_LARGE, "Request Entity Too Large", "RFC 7231, Section 6.5.11");
  (414, REQUEST_URI_TOO_LONG, "Request-URI Too Long", "RFC 7231, Section 6.5.12");
  (415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type", "RFC 7231, Section 6.5.13");
  (416, REQUESTED_RANGE_NOT_SATISFIABLE, "Requested Range Not Satisfiable", "RFC 7233, Section 4.4");
  (417, EXPECTATION_FAILED, "Expectation Failed", "RFC 7231, Section 6.5.14");
  (418, IM_A_TEAPOT, "I'm a teapot", "RFC 2324, Section 2.3.2");
  (421, MISDIRECTED_REQUEST, "Misdirected Request", "RFC 7540, Section 9.1.2");
  (422, UNPROCESSABLE_ENTITY, "Unprocessable Entity", "RFC 2518, Section 10.3");
  (423, LOCKED, "Locked", "RFC 2518, Section 10.4");
  (424, FAILED_DEPENDENCY, "Failed Dependency", "RFC 2518, Section 10.5");
  (425, TOO_EARLY, "Too Early", "RFC 8470, Section 5");
  (426, UPGRADE_REQUIRED, "Upgrade Required", "RFC 7231, Section 6.5.15");
  (428, PRECONDITION_REQUIRED, "Precondition Required", "RFC 6585, Section 3");
  (429, TOO_MANY_REQUESTS, "Too Many Requests", "RFC 6585, Section 5");
  (431, REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large", "RFC 6585, Section 6");
  (451, UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons", "RFC 7725");

  (500, INTERNAL_SERVER_ERROR, "Internal Server Error", "RFC 7231, Section 6.6.1");
  (501, NOT_IMPLEMENTED, "Not Implemented", "RFC 7231, Section 6.6.2");
  (502, BAD_GATEWAY, "Bad Gateway", "RFC 7231, Section 6.6.3");
  (503, SERVICE_UNAVAILABLE, "Service Unavailable", "RFC 7231, Section 6.6.4");
  (504, GATEWAY_TIMEOUT, "Gateway Timeout", "RFC 7231, Section 6.6.5");
  (505, HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported", "RFC 7231, Section 6.6.6");
  (506, VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates", "RFC 2295, Section 8.1");
  (507, INSUFFICIENT_STORAGE, "Insufficient Storage", "RFC 2518, Section 10.6");
  (508, LOOP_DETECTED, "Loop Detected", "RFC 5842, Section 7.2");
  (511, NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required", "RFC 6585, Section 6");
}
