//! C FFI bindings for sc-core
//!
//! This crate provides a C-compatible API for embedding the combine engine
//! in GUI shells or other C/C++ hosts. The host reads file contents itself
//! and passes them here as UTF-8 strings, in selection order.

use sc_core::{CombinedDocument, RawFile};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Opaque handle to a combined document
pub struct ScDocument {
    inner: CombinedDocument,
}

/// An owned byte buffer returned to the host
///
/// Free with `sc_free_buffer`.
#[repr(C)]
pub struct ScBuffer {
    pub data: *mut u8,
    pub len: usize,
}

/// Combine file contents into a document
///
/// `names` may be null, in which case placeholder names are used; otherwise
/// it must parallel `texts`.
///
/// # Safety
/// - `texts` must be a valid pointer to an array of `count` C strings
/// - `names`, if non-null, must be a valid pointer to an array of `count` C strings
/// - Returns null on error
#[no_mangle]
pub unsafe extern "C" fn sc_combine(
    texts: *const *const c_char,
    names: *const *const c_char,
    count: usize,
    dedupe: bool,
) -> *mut ScDocument {
    if texts.is_null() {
        return ptr::null_mut();
    }

    let mut files: Vec<RawFile> = Vec::with_capacity(count);

    for i in 0..count {
        let text_ptr = *texts.add(i);
        if text_ptr.is_null() {
            return ptr::null_mut();
        }

        let text = match CStr::from_ptr(text_ptr).to_str() {
            Ok(s) => s,
            Err(_) => return ptr::null_mut(),
        };

        let name = if names.is_null() {
            format!("file{}", i)
        } else {
            let name_ptr = *names.add(i);
            if name_ptr.is_null() {
                format!("file{}", i)
            } else {
                match CStr::from_ptr(name_ptr).to_str() {
                    Ok(s) => s.to_string(),
                    Err(_) => return ptr::null_mut(),
                }
            }
        };

        files.push(RawFile::new(i, name, text));
    }

    match sc_core::combine(&files, dedupe) {
        Ok(document) => Box::into_raw(Box::new(ScDocument { inner: document })),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a document
///
/// # Safety
/// - `document` must be a valid pointer returned by `sc_combine` or null
#[no_mangle]
pub unsafe extern "C" fn sc_free_document(document: *mut ScDocument) {
    if !document.is_null() {
        drop(Box::from_raw(document));
    }
}

/// Get the number of header groups in a document
///
/// # Safety
/// - `document` must be a valid pointer returned by `sc_combine`
#[no_mangle]
pub unsafe extern "C" fn sc_document_group_count(document: *const ScDocument) -> usize {
    if document.is_null() {
        return 0;
    }
    let document = &*document;
    document.inner.group_count()
}

/// Get the total number of body rows in a document
///
/// # Safety
/// - `document` must be a valid pointer returned by `sc_combine`
#[no_mangle]
pub unsafe extern "C" fn sc_document_row_count(document: *const ScDocument) -> usize {
    if document.is_null() {
        return 0;
    }
    let document = &*document;
    document.inner.row_count()
}

/// Get a group's header line by index
///
/// # Safety
/// - `document` must be a valid pointer returned by `sc_combine`
/// - Returns null if index is out of bounds
/// - Caller must free the returned string with `sc_free_string`
#[no_mangle]
pub unsafe extern "C" fn sc_document_group_header(
    document: *const ScDocument,
    index: usize,
) -> *mut c_char {
    if document.is_null() {
        return ptr::null_mut();
    }

    let document = &*document;
    document
        .inner
        .groups
        .get(index)
        .and_then(|g| CString::new(g.header.as_str()).ok())
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Get the combined text of a document
///
/// # Safety
/// - `document` must be a valid pointer returned by `sc_combine`
/// - Caller must free the returned string with `sc_free_string`
#[no_mangle]
pub unsafe extern "C" fn sc_document_text(document: *const ScDocument) -> *mut c_char {
    if document.is_null() {
        return ptr::null_mut();
    }

    let document = &*document;
    CString::new(document.inner.text())
        .ok()
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Get the document as JSON
///
/// # Safety
/// - `document` must be a valid pointer returned by `sc_combine`
/// - Caller must free the returned string with `sc_free_string`
#[no_mangle]
pub unsafe extern "C" fn sc_document_to_json(document: *const ScDocument) -> *mut c_char {
    if document.is_null() {
        return ptr::null_mut();
    }

    let document = &*document;
    serde_json::to_string(&document.inner)
        .ok()
        .and_then(|json| CString::new(json).ok())
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Encode a document as an xlsx workbook
///
/// # Safety
/// - `document` must be a valid pointer returned by `sc_combine`
/// - Returns null on encode failure
/// - Caller must free the returned buffer with `sc_free_buffer`
#[no_mangle]
pub unsafe extern "C" fn sc_encode_workbook(document: *const ScDocument) -> *mut ScBuffer {
    if document.is_null() {
        return ptr::null_mut();
    }

    let document = &*document;
    match sc_core::encode_workbook(&document.inner.text()) {
        Ok(bytes) => {
            let mut boxed = bytes.into_boxed_slice();
            let buffer = ScBuffer {
                data: boxed.as_mut_ptr(),
                len: boxed.len(),
            };
            std::mem::forget(boxed);
            Box::into_raw(Box::new(buffer))
        }
        Err(_) => ptr::null_mut(),
    }
}

/// Free a buffer returned by `sc_encode_workbook`
///
/// # Safety
/// - `buffer` must be a valid pointer returned by `sc_encode_workbook` or null
#[no_mangle]
pub unsafe extern "C" fn sc_free_buffer(buffer: *mut ScBuffer) {
    if !buffer.is_null() {
        let buffer = Box::from_raw(buffer);
        if !buffer.data.is_null() {
            drop(Box::from_raw(std::slice::from_raw_parts_mut(
                buffer.data,
                buffer.len,
            )));
        }
    }
}

/// Free a string returned by other FFI functions
///
/// # Safety
/// - `s` must be a valid pointer returned by an sc_* function or null
#[no_mangle]
pub unsafe extern "C" fn sc_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
