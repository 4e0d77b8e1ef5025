//! Built-in rule catalogue for the responsive-class migration.
//!
//! Pure data: ordered pattern/replacement pairs, compiled into the default
//! [`RuleSet`](super::RuleSet) by [`RuleSet::builtin`](super::RuleSet::builtin).
//! Order is load-bearing. More specific patterns come before the general
//! ones that would otherwise shadow them, and the spacing rules at the end
//! deliberately run over text the earlier rules produced.
//!
//! The structural table-wrapper rules use `\s*` between element fragments
//! so a match tolerates arbitrary whitespace and newlines between the
//! nested tags.

/// Ordered pattern/replacement pairs, applied top to bottom.
pub const CATALOGUE: &[(&str, &str)] = &[
    // 1. Containers
    (
        r#"className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8""#,
        r#"className="container-responsive section-spacing""#,
    ),
    (
        r#"className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8""#,
        r#"className="container-responsive""#,
    ),
    (r#"className="p-6 sm:p-8""#, r#"className="p-responsive""#),
    (
        r#"className="p-3 sm:p-4 md:p-6 pb-8""#,
        r#"className="container-responsive section-spacing""#,
    ),
    // 2. Headings
    (
        r#"className="text-3xl font-bold text-gray-900"#,
        r#"className="heading-1-responsive text-gray-900"#,
    ),
    (
        r#"className="text-3xl font-bold"#,
        r#"className="heading-1-responsive"#,
    ),
    (
        r#"className="text-2xl sm:text-3xl font-bold text-gray-900"#,
        r#"className="heading-1-responsive text-gray-900"#,
    ),
    (
        r#"className="text-2xl sm:text-3xl font-bold"#,
        r#"className="heading-1-responsive"#,
    ),
    (
        r#"className="text-2xl font-bold text-gray-900"#,
        r#"className="heading-2-responsive text-gray-900"#,
    ),
    (
        r#"className="text-2xl font-bold"#,
        r#"className="heading-2-responsive"#,
    ),
    (
        r#"className="text-xl font-bold text-gray-900"#,
        r#"className="heading-3-responsive text-gray-900"#,
    ),
    (
        r#"className="text-xl font-bold"#,
        r#"className="heading-3-responsive"#,
    ),
    (
        r#"className="text-lg sm:text-xl font-bold"#,
        r#"className="heading-3-responsive"#,
    ),
    (
        r#"className="text-lg font-semibold text-gray-900"#,
        r#"className="heading-3-responsive text-gray-900"#,
    ),
    (
        r#"className="text-lg font-semibold"#,
        r#"className="heading-3-responsive"#,
    ),
    // 3. Cards
    (
        r#"className="bg-white rounded-lg shadow-sm border border-gray-200 p-6"#,
        r#"className="card-responsive"#,
    ),
    (
        r#"className="bg-white rounded-lg shadow-sm border border-gray-200 p-4 sm:p-6"#,
        r#"className="card-responsive"#,
    ),
    (
        r#"className="bg-white rounded-lg shadow border border-gray-200 p-6"#,
        r#"className="card-responsive"#,
    ),
    (
        r#"className="bg-white rounded-xl shadow-sm border border-gray-200 p-6"#,
        r#"className="card-responsive"#,
    ),
    (
        r#"className="bg-white rounded-lg shadow-sm border border-gray-200 mb-4 sm:mb-6 p-3 sm:p-4""#,
        r#"className="card-responsive mb-responsive""#,
    ),
    // 4. Grids
    (
        r#"className="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6"#,
        r#"className="grid-responsive-4"#,
    ),
    (
        r#"className="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6"#,
        r#"className="grid-responsive-3"#,
    ),
    (
        r#"className="grid grid-cols-1 md:grid-cols-2 gap-6"#,
        r#"className="grid-responsive-2"#,
    ),
    (
        r#"className="grid grid-cols-1 sm:grid-cols-2 gap-6"#,
        r#"className="grid-responsive-2"#,
    ),
    (
        r#"className="grid grid-cols-1 sm:grid-cols-2 gap-3 sm:gap-4""#,
        r#"className="grid-responsive-2""#,
    ),
    (
        r#"className="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4"#,
        r#"className="grid-responsive-5"#,
    ),
    (
        r#"className="grid grid-cols-4 gap-6"#,
        r#"className="stats-grid"#,
    ),
    (
        r#"className="grid grid-cols-3 gap-6"#,
        r#"className="grid-responsive-3"#,
    ),
    (
        r#"className="grid grid-cols-2 gap-6"#,
        r#"className="grid-responsive-2"#,
    ),
    (
        r#"className="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-3 sm:gap-4""#,
        r#"className="grid-responsive-4""#,
    ),
    // 5. Buttons, primary
    (
        r#"className="flex items-center gap-2 px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"#,
        r#"className="flex items-center gap-2 btn-primary-responsive"#,
    ),
    (
        r#"className="flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"#,
        r#"className="flex items-center gap-2 btn-primary-responsive"#,
    ),
    (
        r#"className="flex items-center gap-2 px-3 sm:px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"#,
        r#"className="flex items-center gap-2 btn-primary-responsive"#,
    ),
    (
        r#"className="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"#,
        r#"className="btn-primary-responsive"#,
    ),
    (
        r#"className="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"#,
        r#"className="btn-primary-responsive"#,
    ),
    (
        r#"className="px-3 sm:px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50 text-sm sm:text-base""#,
        r#"className="btn-primary-responsive disabled:opacity-50""#,
    ),
    (
        r#"className="px-3 sm:px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 text-sm sm:text-base""#,
        r#"className="btn-primary-responsive""#,
    ),
    // 6. Buttons, green (import/add)
    (
        r#"className="flex items-center gap-2 px-3 sm:px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 text-sm sm:text-base""#,
        r#"className="flex items-center gap-2 btn-primary-responsive bg-green-600 hover:bg-green-700""#,
    ),
    (
        r#"className="flex items-center gap-2 px-6 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"#,
        r#"className="flex items-center gap-2 btn-primary-responsive bg-green-600 hover:bg-green-700"#,
    ),
    (
        r#"className="px-6 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"#,
        r#"className="btn-primary-responsive bg-green-600 hover:bg-green-700"#,
    ),
    // 7. Buttons, secondary
    (
        r#"className="flex items-center gap-2 px-3 sm:px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 text-sm sm:text-base""#,
        r#"className="flex items-center gap-2 btn-secondary-responsive""#,
    ),
    (
        r#"className="px-6 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300"#,
        r#"className="btn-secondary-responsive"#,
    ),
    (
        r#"className="px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300"#,
        r#"className="btn-secondary-responsive"#,
    ),
    (
        r#"className="px-6 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200"#,
        r#"className="btn-secondary-responsive"#,
    ),
    (
        r#"className="px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200"#,
        r#"className="btn-secondary-responsive"#,
    ),
    (
        r#"className="px-6 py-2 border border-gray-300 rounded-lg hover:bg-gray-50"#,
        r#"className="btn-secondary-responsive"#,
    ),
    (
        r#"className="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50"#,
        r#"className="btn-secondary-responsive"#,
    ),
    (
        r#"className="px-3 sm:px-4 py-2 border rounded-lg hover:bg-gray-50 text-sm sm:text-base""#,
        r#"className="btn-secondary-responsive""#,
    ),
    // 8. Buttons, danger
    (
        r#"className="px-6 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700"#,
        r#"className="btn-danger-responsive"#,
    ),
    (
        r#"className="px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700"#,
        r#"className="btn-danger-responsive"#,
    ),
    // 9. Form labels
    (
        r#"className="block text-sm font-medium text-gray-700 mb-2"#,
        r#"className="form-label-responsive"#,
    ),
    (
        r#"className="block text-sm font-medium text-gray-700 mb-1"#,
        r#"className="form-label-responsive"#,
    ),
    (
        r#"className="block text-xs sm:text-sm font-medium text-gray-700 mb-1""#,
        r#"className="form-label-responsive""#,
    ),
    // 10. Form inputs
    (
        r#"className="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"#,
        r#"className="form-input-responsive"#,
    ),
    (
        r#"className="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"#,
        r#"className="form-input-responsive"#,
    ),
    (
        r#"className="w-full px-4 py-2 border rounded-lg focus:ring-2 focus:ring-blue-500"#,
        r#"className="form-input-responsive"#,
    ),
    (
        r#"className="w-full px-3 py-2 border rounded-lg focus:ring-2 focus:ring-blue-500"#,
        r#"className="form-input-responsive"#,
    ),
    (
        r#"className="w-full px-4 py-2 border border-gray-300 rounded-lg"#,
        r#"className="form-input-responsive"#,
    ),
    (
        r#"className="w-full px-3 py-2 border border-gray-300 rounded-lg"#,
        r#"className="form-input-responsive"#,
    ),
    (
        r#"className="w-full px-3 py-2 border rounded-lg text-sm sm:text-base""#,
        r#"className="form-select-responsive""#,
    ),
    // 11. Tables, wrapper (structural, multi-line)
    (
        r#"<div className="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden">\s*<div className="overflow-x-auto">\s*<table className="min-w-full divide-y divide-gray-200">"#,
        "<div className=\"table-responsive-wrapper custom-scrollbar\">\n        <table className=\"table-responsive\">",
    ),
    (
        r#"<div className="overflow-x-auto rounded-lg border border-gray-200">\s*<table className="min-w-full divide-y divide-gray-200">"#,
        "<div className=\"table-responsive-wrapper custom-scrollbar\">\n        <table className=\"table-responsive\">",
    ),
    (
        r#"<div className="overflow-x-auto">\s*<table className="min-w-full divide-y divide-gray-200">"#,
        "<div className=\"table-responsive-wrapper custom-scrollbar\">\n        <table className=\"table-responsive\">",
    ),
    // 12. Table headers
    (
        r#"className="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider"#,
        r#"className="table-th-responsive"#,
    ),
    (
        r#"className="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase"#,
        r#"className="table-th-responsive"#,
    ),
    (
        r#"className="px-3 sm:px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase"#,
        r#"className="table-th-responsive"#,
    ),
    (
        r#"className="px-3 sm:px-4 py-2 sm:py-3 text-left text-xs font-medium text-gray-500 uppercase whitespace-nowrap""#,
        r#"className="table-th-responsive whitespace-nowrap""#,
    ),
    // 13. Table cells
    (
        r#"className="px-6 py-4 whitespace-nowrap"#,
        r#"className="table-td-responsive whitespace-nowrap"#,
    ),
    (
        r#"className="px-6 py-4"#,
        r#"className="table-td-responsive"#,
    ),
    (
        r#"className="px-4 py-3"#,
        r#"className="table-td-responsive"#,
    ),
    (
        r#"className="px-3 sm:px-4 py-3"#,
        r#"className="table-td-responsive"#,
    ),
    (
        r#"className="px-3 sm:px-4 py-2 sm:py-3""#,
        r#"className="table-td-responsive""#,
    ),
    // 14. Modals, backdrop
    (
        r#"className="fixed inset-0 bg-gray-500 bg-opacity-75 flex items-center justify-center z-50"#,
        r#"className="modal-backdrop"#,
    ),
    (
        r#"className="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4""#,
        r#"className="modal-backdrop""#,
    ),
    (
        r#"className="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"#,
        r#"className="modal-backdrop"#,
    ),
    // 15. Modals, content
    (
        r#"className="bg-white rounded-lg shadow-xl max-w-2xl w-full p-6"#,
        r#"className="modal-content-responsive"#,
    ),
    (
        r#"className="bg-white rounded-lg shadow-xl max-w-lg w-full p-6"#,
        r#"className="modal-content-responsive"#,
    ),
    (
        r#"className="bg-white rounded-lg shadow-xl max-w-md w-full p-6"#,
        r#"className="modal-content-responsive"#,
    ),
    (
        r#"className="bg-white rounded-lg p-6 max-w-2xl w-full"#,
        r#"className="modal-content-responsive"#,
    ),
    (
        r#"className="bg-white rounded-lg p-4 sm:p-6 max-w-lg w-full max-h-\[90vh\] overflow-y-auto""#,
        r#"className="modal-content-responsive""#,
    ),
    (
        r#"className="bg-white rounded-lg p-4 sm:p-6 max-w-md w-full max-h-\[90vh\] overflow-y-auto""#,
        r#"className="modal-content-responsive""#,
    ),
    // 16. Modal titles
    (
        r#"className="text-xl font-bold text-gray-900 mb-4"#,
        r#"className="modal-title-responsive mb-4"#,
    ),
    (
        r#"className="text-lg sm:text-xl font-bold mb-4""#,
        r#"className="modal-title-responsive mb-4""#,
    ),
    (
        r#"className="text-xl font-bold mb-4"#,
        r#"className="modal-title-responsive mb-4"#,
    ),
    // 17. Spacing
    (r#"className="mb-6"#, r#"className="mb-responsive"#),
    (r#"className="mb-8"#, r#"className="mb-responsive"#),
    (r#"className="gap-6"#, r#"className="gap-responsive"#),
    (r#"className="mb-4 sm:mb-6""#, r#"className="mb-responsive""#),
    (
        r#"className="bg-blue-50 border border-blue-200 rounded-lg p-3 sm:p-4 mb-4 sm:mb-6""#,
        r#"className="bg-blue-50 border border-blue-200 rounded-lg p-responsive mb-responsive""#,
    ),
];
