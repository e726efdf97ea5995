//! Built-in MCC category table with range-band fallback
//!
//! Resolution consults the specific-code table first, then the numeric
//! range bands used by the card networks, and finally a terminal
//! "Unknown Category" label. Resolution is total: every `u32` maps to
//! exactly one label.

use std::collections::HashMap;

use crate::traits::CategoryResolver;

/// Terminal label for codes outside every defined band
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Specific merchant category codes with dedicated labels
///
/// Codes not listed here fall back to their numeric range band.
const SPECIFIC_CATEGORIES: &[(u32, &str)] = &[
    // Airlines (specific carriers in the 3000-3299 range)
    (3000, "Travel - Airlines - United Airlines"),
    (3001, "Travel - Airlines - American Airlines"),
    (3002, "Travel - Airlines - Pan American"),
    (3003, "Travel - Airlines - Eurofly"),
    (3004, "Travel - Airlines - Dragonfair"),
    (3005, "Travel - Airlines - British Airways"),
    (3006, "Travel - Airlines - Japan Airlines"),
    (3007, "Travel - Airlines - Air France"),
    (3008, "Travel - Airlines - Lufthansa"),
    (3009, "Travel - Airlines - Air Canada"),
    (3010, "Travel - Airlines - KLM Royal Dutch Airlines"),
    (3011, "Travel - Airlines - Aeroflot"),
    (3012, "Travel - Airlines - Qantas"),
    (3013, "Travel - Airlines - Alitalia"),
    (3014, "Travel - Airlines - Saudi Arabian Airlines"),
    (3015, "Travel - Airlines - Swiss International"),
    (3016, "Travel - Airlines - SAS"),
    (3017, "Travel - Airlines - South African Airways"),
    (3018, "Travel - Airlines - Varig"),
    (3020, "Travel - Airlines - Air India"),
    (3025, "Travel - Airlines - Air Berlin"),
    (3026, "Travel - Airlines - Emirates Airlines"),
    (3035, "Travel - Airlines - Etihad Airways"),
    (3058, "Travel - Airlines - Delta"),
    (3066, "Travel - Airlines - Southwest Airlines"),
    (3131, "Travel - Airlines - Frontier Airlines"),
    (3143, "Travel - Airlines - Spirit Airlines"),
    (3144, "Travel - Airlines - Virgin Atlantic Airways"),
    (3245, "Travel - Airlines - Singapore Airlines"),
    (3246, "Travel - Airlines - Qatar Airways"),
    (3247, "Travel - Airlines - Turkish Airlines"),
    (3248, "Travel - Airlines - WestJet Airlines"),
    (3299, "Travel - Airlines - Other"),
    // Car rental agencies (3300-3499 range)
    (3300, "Travel - Car Rental - Budget Rent-A-Car"),
    (3351, "Travel - Car Rental - Hertz"),
    (3352, "Travel - Car Rental - Dollar Rent-A-Car"),
    (3353, "Travel - Car Rental - National Car Rental"),
    (3354, "Travel - Car Rental - Avis Rent-A-Car"),
    (3355, "Travel - Car Rental - Enterprise Rent-A-Car"),
    (3357, "Travel - Car Rental - Alamo Rent-A-Car"),
    (3395, "Travel - Car Rental - Thrifty Car Rental"),
    (3405, "Travel - Car Rental - Enterprise Rent-A-Car"),
    (3434, "Travel - Car Rental - Payless Car Rental"),
    (3441, "Travel - Car Rental - Sixt Car Rental"),
    (3499, "Travel - Car Rental - Other"),
    // Hotels and lodging (3500-3999 range)
    (3501, "Travel - Lodging - Holiday Inn"),
    (3502, "Travel - Lodging - Best Western"),
    (3503, "Travel - Lodging - Sheraton"),
    (3504, "Travel - Lodging - Hilton"),
    (3505, "Travel - Lodging - Hyatt Hotels"),
    (3506, "Travel - Lodging - Intercontinental Hotels"),
    (3507, "Travel - Lodging - Westin"),
    (3508, "Travel - Lodging - Marriott"),
    (3509, "Travel - Lodging - Four Seasons"),
    (3510, "Travel - Lodging - Days Inn"),
    (3512, "Travel - Lodging - La Quinta Inns"),
    (3515, "Travel - Lodging - Courtyard by Marriott"),
    (3521, "Travel - Lodging - DoubleTree Hotel"),
    (3535, "Travel - Lodging - Hilton International"),
    (3536, "Travel - Lodging - Radisson Hotels"),
    (3542, "Travel - Lodging - Ritz-Carlton"),
    (3543, "Travel - Lodging - Hampton Inns"),
    (3546, "Travel - Lodging - Homewood Suites"),
    (3550, "Travel - Lodging - Embassy Suites"),
    (3559, "Travel - Lodging - W Hotels"),
    (3560, "Travel - Lodging - Waldorf Astoria"),
    (3561, "Travel - Lodging - Comfort Inn"),
    (3562, "Travel - Lodging - Quality Inn"),
    (3563, "Travel - Lodging - Sleep Inn & Suites"),
    (3564, "Travel - Lodging - Clarion Hotels"),
    (3565, "Travel - Lodging - Cambria Suites"),
    (3566, "Travel - Lodging - Ascend Collection Hotels"),
    (3572, "Travel - Lodging - Fairfield Inn"),
    (3573, "Travel - Lodging - TownePlace Suites"),
    (3574, "Travel - Lodging - SpringHill Suites"),
    (3575, "Travel - Lodging - Residence Inn"),
    (3579, "Travel - Lodging - Extended Stay America"),
    (3581, "Travel - Lodging - Candlewood Suites"),
    (3582, "Travel - Lodging - Staybridge Suites"),
    (3583, "Travel - Lodging - Holiday Inn Express"),
    (3584, "Travel - Lodging - Crowne Plaza Hotels"),
    (3585, "Travel - Lodging - Hotel Indigo"),
    (3586, "Travel - Lodging - Wyndham Hotels"),
    (3587, "Travel - Lodging - Super 8 Motels"),
    (3588, "Travel - Lodging - Howard Johnson"),
    (3589, "Travel - Lodging - Travelodge"),
    (3590, "Travel - Lodging - Fairmont Hotels"),
    (3591, "Travel - Lodging - Knights Inn"),
    (3592, "Travel - Lodging - Ramada Inns"),
    (3600, "Travel - Lodging - Motel 6"),
    (3615, "Travel - Lodging - Studio 6"),
    (3620, "Travel - Lodging - Ace Hotel"),
    (3625, "Travel - Lodging - Aloft Hotels"),
    (3629, "Travel - Lodging - Kimpton Hotels"),
    (3635, "Travel - Lodging - Grand Hyatt"),
    (3640, "Travel - Lodging - Park Hyatt"),
    (3641, "Travel - Lodging - Hyatt Place"),
    (3645, "Travel - Lodging - Hyatt Regency"),
    (3649, "Travel - Lodging - Andaz Hotels"),
    (3650, "Travel - Lodging - Hyatt House"),
    (3660, "Travel - Lodging - Omni Hotels"),
    (3665, "Travel - Lodging - The Peninsula Hotels"),
    (3670, "Travel - Lodging - Red Roof Inns"),
    (3675, "Travel - Lodging - Microtel Inns & Suites"),
    (3680, "Travel - Lodging - Renaissance Hotels"),
    (3681, "Travel - Lodging - JW Marriott"),
    (3685, "Travel - Lodging - Autograph Collection Hotels"),
    (3690, "Travel - Lodging - Millennium Hotels"),
    (3695, "Travel - Lodging - Element Hotels"),
    (3700, "Travel - Lodging - Starwood Hotels"),
    (3705, "Travel - Lodging - Le Meridien"),
    (3715, "Travel - Lodging - St. Regis"),
    (3734, "Travel - Lodging - Hard Rock Hotels"),
    (3738, "Travel - Lodging - MGM Resorts Properties"),
    (3739, "Travel - Lodging - Bellagio"),
    (3740, "Travel - Lodging - Aria"),
    (3741, "Travel - Lodging - Vdara"),
    (3742, "Travel - Lodging - Mandalay Bay"),
    (3743, "Travel - Lodging - THEhotel"),
    (3744, "Travel - Lodging - Delano"),
    (3745, "Travel - Lodging - Luxor"),
    (3746, "Travel - Lodging - Excalibur"),
    (3747, "Travel - Lodging - New York New York"),
    (3748, "Travel - Lodging - Monte Carlo"),
    (3749, "Travel - Lodging - MGM Grand"),
    (3770, "Travel - Lodging - Caesars Properties"),
    (3780, "Travel - Lodging - Harrah's"),
    (3781, "Travel - Lodging - Flamingo"),
    (3782, "Travel - Lodging - Bally's"),
    (3783, "Travel - Lodging - Paris Las Vegas"),
    (3784, "Travel - Lodging - Rio"),
    (3785, "Travel - Lodging - Planet Hollywood"),
    (3786, "Travel - Lodging - Caesars Palace"),
    (3790, "Travel - Lodging - The Cromwell"),
    (3795, "Travel - Lodging - The LINQ"),
    (3800, "Travel - Lodging - Wynn Las Vegas"),
    (3801, "Travel - Lodging - Encore"),
    (3802, "Travel - Lodging - Venetian Resort"),
    (3803, "Travel - Lodging - Palazzo Resort"),
    (3805, "Travel - Lodging - The Cosmopolitan"),
    (3815, "Travel - Lodging - Nobu Hotels"),
    (3825, "Travel - Lodging - Four Points by Sheraton"),
    (3850, "Travel - Lodging - Mandarin Oriental"),
    (3855, "Travel - Lodging - Disney Resorts"),
    (3865, "Travel - Lodging - Mlife Resorts"),
    (3866, "Travel - Lodging - AC Hotels by Marriott"),
    (3870, "Travel - Lodging - Moxy Hotels"),
    (3880, "Travel - Lodging - EDITION Hotels"),
    (3885, "Travel - Lodging - Design Hotels"),
    (3890, "Travel - Lodging - Tribute Portfolio Hotels"),
    (3900, "Travel - Lodging - Waldorf Astoria Hotels & Resorts"),
    (3912, "Travel - Lodging - Curio Collection Hotels"),
    (3920, "Travel - Lodging - Canopy by Hilton"),
    (3935, "Travel - Lodging - Tapestry Collection by Hilton"),
    (3940, "Travel - Lodging - Tru by Hilton"),
    (3941, "Travel - Lodging - Home2 Suites by Hilton"),
    (3950, "Travel - Lodging - Hilton Garden Inn"),
    (3955, "Travel - Lodging - Conrad Hotels"),
    (3999, "Travel - Lodging - Other"),
    // Transportation services (4000-4799)
    (4011, "Travel - Transportation - Railroads"),
    (4111, "Travel - Transportation - Local/Suburban Commuter"),
    (4112, "Travel - Transportation - Passenger Railways"),
    (4119, "Travel - Transportation - Ambulance Services"),
    (4121, "Travel - Transportation - Taxicabs and Limousines"),
    (4131, "Travel - Transportation - Bus Lines"),
    (4214, "Travel - Transportation - Motor Freight Carriers"),
    (4215, "Travel - Transportation - Courier Services"),
    (4225, "Travel - Transportation - Public Warehousing"),
    (4411, "Travel - Transportation - Cruise Lines"),
    (4457, "Travel - Transportation - Boat Rentals and Leases"),
    (4468, "Travel - Transportation - Marinas, Marine Service"),
    (4511, "Travel - Transportation - Airlines, Air Carriers"),
    (4582, "Travel - Transportation - Airports, Airport Terminals"),
    (4722, "Travel - Transportation - Travel Agencies and Tour Operators"),
    (4723, "Travel - Transportation - Package Tour Operators"),
    (4784, "Travel - Transportation - Toll and Bridge Fees"),
    (4789, "Travel - Transportation - Transportation Services"),
    // Utility services (4800-4999)
    (4812, "Utilities - Telecommunication Equipment"),
    (4813, "Utilities - Telecom Key-Function Transaction"),
    (4814, "Utilities - Telecommunication Services"),
    (4815, "Utilities - Monthly Telecom Services"),
    (4816, "Utilities - Computer Network/Information Services"),
    (4821, "Utilities - Telegraph Services"),
    (4829, "Utilities - Money Orders"),
    (4899, "Utilities - Cable and Other Pay TV Services"),
    (4900, "Utilities - Electric, Gas, Sanitary, Water"),
    // Retail outlet services (5000-5599)
    (5013, "Retail - Motor Vehicle Supplies and Parts"),
    (5021, "Retail - Office and Commercial Furniture"),
    (5039, "Retail - Construction Materials"),
    (5044, "Retail - Office, Photographic Equipment"),
    (5045, "Retail - Computers and Computer Equipment"),
    (5046, "Retail - Commercial Equipment"),
    (5047, "Retail - Medical, Dental Equipment"),
    (5051, "Retail - Metal Service Centers and Offices"),
    (5065, "Retail - Electrical Parts and Equipment"),
    (5072, "Retail - Hardware Equipment and Supplies"),
    (5074, "Retail - Plumbing and Heating Equipment"),
    (5085, "Retail - Industrial Supplies"),
    (5094, "Retail - Precious Stones and Metals"),
    (5099, "Retail - Durable Goods"),
    (5111, "Retail - Stationery, Office Supplies"),
    (5122, "Retail - Drugs, Proprietaries, Sundries"),
    (5131, "Retail - Piece Goods, Notions, and Other Dry Goods"),
    (5137, "Retail - Men's, Women's, and Children's Uniforms"),
    (5139, "Retail - Commercial Footwear"),
    (5169, "Retail - Chemicals and Allied Products"),
    (5172, "Retail - Petroleum and Petroleum Products"),
    (5192, "Retail - Books, Periodicals, and Newspapers"),
    (5193, "Retail - Florists Supplies, Nursery Stock"),
    (5198, "Retail - Paints, Varnishes, and Supplies"),
    (5199, "Retail - Non-Durable Goods"),
    (5200, "Retail - Home Supply Warehouse Stores"),
    (5211, "Retail - Lumber and Building Materials"),
    (5231, "Retail - Glass, Paint, and Wallpaper Stores"),
    (5251, "Retail - Hardware Stores"),
    (5261, "Retail - Lawn and Garden Supply Stores"),
    (5271, "Retail - Mobile Home Dealers"),
    (5300, "Retail - Wholesale Clubs"),
    (5309, "Retail - Duty-Free Stores"),
    (5310, "Retail - Discount Stores"),
    (5311, "Retail - Department Stores"),
    (5331, "Retail - Variety Stores"),
    (5399, "Retail - Miscellaneous General Merchandise"),
    (5411, "Grocery - Supermarkets and Grocery Stores"),
    (5422, "Grocery - Meat Providers"),
    (5441, "Grocery - Candy Stores"),
    (5451, "Grocery - Dairy Products"),
    (5462, "Grocery - Bakeries"),
    (5499, "Grocery - Specialty Food Stores"),
    (5511, "Retail - Car and Truck Dealers (New and Used)"),
    (5521, "Retail - Car and Truck Dealers (Used Only)"),
    (5531, "Retail - Auto and Home Supply Stores"),
    (5532, "Retail - Automotive Tire Stores"),
    (5533, "Retail - Automotive Parts and Accessories Stores"),
    (5541, "Gas - Service Stations"),
    (5542, "Gas - Automated Fuel Dispensers"),
    (5551, "Retail - Boat Dealers"),
    (5561, "Retail - Camper, Recreational and Utility Trailer Dealers"),
    (5571, "Retail - Motorcycle Shops and Dealers"),
    (5592, "Retail - Motor Homes Dealers"),
    (5598, "Retail - Snowmobile Dealers"),
    (5599, "Retail - Miscellaneous Automotive Dealers"),
    // Clothing stores (5600-5699)
    (5611, "Retail - Men's and Boys' Clothing and Accessory Stores"),
    (5621, "Retail - Women's Ready-to-Wear Stores"),
    (5631, "Retail - Women's Accessory and Specialty Shops"),
    (5641, "Retail - Children's and Infants' Wear Stores"),
    (5651, "Retail - Family Clothing Stores"),
    (5655, "Retail - Sports and Riding Apparel Stores"),
    (5661, "Retail - Shoe Stores"),
    (5681, "Retail - Furriers and Fur Shops"),
    (5691, "Retail - Men's and Women's Clothing Stores"),
    (5697, "Retail - Tailors, Seamstresses, Mending"),
    (5698, "Retail - Wig and Toupee Stores"),
    (5699, "Retail - Miscellaneous Apparel and Accessory Shops"),
    // Miscellaneous stores (5700-7299)
    (5712, "Retail - Furniture, Home Furnishings"),
    (5713, "Retail - Floor Covering Stores"),
    (5714, "Retail - Drapery, Window Covering"),
    (5718, "Retail - Fireplace, and Accessories Stores"),
    (5719, "Retail - Miscellaneous Home Furnishing Stores"),
    (5722, "Retail - Household Appliance Stores"),
    (5732, "Retail - Electronics Stores"),
    (5733, "Retail - Music Stores (Musical Instruments, Pianos)"),
    (5734, "Retail - Computer Software Stores"),
    (5735, "Retail - Record Stores"),
    (5811, "Dining - Caterers"),
    (5812, "Dining - Restaurants"),
    (5813, "Dining - Bars, Lounges, Discos, Nightclubs, Taverns"),
    (5814, "Dining - Fast Food Restaurants"),
    (5815, "Digital Goods - Digital Goods: Media, Books, Movies, Music"),
    (5816, "Digital Goods - Digital Goods: Games"),
    (5817, "Digital Goods - Digital Goods: Applications (Excludes Games)"),
    (5818, "Digital Goods - Digital Goods: Large Digital Goods Merchant"),
    (5832, "Retail - Antique Shops"),
    (5912, "Drugstores - Drug Stores and Pharmacies"),
    (5921, "Retail - Package Stores, Beer, Wine, and Liquor"),
    (5931, "Retail - Used Merchandise and Secondhand Stores"),
    (5932, "Retail - Antique Shops - Sales, Repairs"),
    (5933, "Retail - Pawn Shops"),
    (5935, "Retail - Wrecking and Salvage Yards"),
    (5937, "Retail - Antique Reproductions"),
    (5940, "Retail - Bicycle Shops - Sales and Service"),
    (5941, "Retail - Sporting Goods Stores"),
    (5942, "Retail - Book Stores"),
    (5943, "Retail - Stationery Stores, Office Supplies"),
    (5944, "Retail - Jewelry Stores, Watches, Clocks"),
    (5945, "Retail - Hobby, Toy, and Game Shops"),
    (5946, "Retail - Camera and Photographic Supply Stores"),
    (5947, "Retail - Gift, Card, Novelty, and Souvenir Shops"),
    (5948, "Retail - Luggage and Leather Goods Stores"),
    (5949, "Retail - Fabric, Needlework, Piece Goods, and Sewing Stores"),
    (5950, "Retail - Glassware, Crystal Stores"),
    (5960, "Retail - Direct Marketing - Insurance Services"),
    (5962, "Retail - Direct Marketing - Travel"),
    (5963, "Retail - Door-to-Door Sales"),
    (5964, "Retail - Direct Marketing - Catalog Merchant"),
    (5965, "Retail - Direct Marketing - Combination Catalog and Retail Merchant"),
    (5966, "Retail - Direct Marketing - Outbound Telemktg Merchant"),
    (5967, "Retail - Direct Marketing - Inbound Telemktg Merchant"),
    (5968, "Retail - Direct Marketing - Continuity/Subscription Merchant"),
    (5969, "Retail - Direct Marketing - Other Direct Marketers"),
    (5970, "Retail - Artists' Supply and Craft Shops"),
    (5971, "Retail - Art Dealers and Galleries"),
    (5972, "Retail - Stamp and Coin Stores"),
    (5973, "Retail - Religious Goods Stores"),
    (5975, "Retail - Hearing Aids - Sales, Service"),
    (5976, "Retail - Orthopedic Goods - Prosthetic Devices"),
    (5977, "Retail - Cosmetic Stores"),
    (5978, "Retail - Typewriter Stores - Sales, Service"),
    (5983, "Retail - Fuel Dealers - Fuel Oil, Wood, Coal"),
    (5992, "Retail - Florists"),
    (5993, "Retail - Cigar Stores and Stands"),
    (5994, "Retail - News Dealers and Newsstands"),
    (5995, "Retail - Pet Shops, Pet Foods, and Supplies"),
    (5996, "Retail - Swimming Pools - Sales, Supplies"),
    (5997, "Retail - Electric Razor Stores - Sales and Service"),
    (5998, "Retail - Tent and Awning Shops"),
    (5999, "Retail - Miscellaneous Specialty Retail"),
    (6010, "Financial - Manual Cash Disbursements"),
    (6011, "Financial - Automated Cash Disbursements"),
    (6012, "Financial - Financial Institutions"),
    (6050, "Financial - Quasi Cash—Member Financial Institution"),
    (6051, "Financial - Quasi Cash—Merchant"),
    (6211, "Financial - Securities—Brokers/Dealers"),
    (6300, "Financial - Insurance Sales/Underwriting"),
    (6381, "Financial - Insurance Premiums"),
    (6399, "Financial - Insurance - Default"),
    (6513, "Financial - Real Estate Agents and Managers - Rentals"),
    (6529, "Financial - Remote Stored Value Load"),
    (6530, "Financial - Remote Stored Value Load"),
    (6531, "Financial - Payment Service Provider"),
    (6532, "Financial - Payment Transaction--Member"),
    (6533, "Financial - Payment Transaction--Merchant"),
    (6534, "Financial - Money Transfer--Member"),
    (6535, "Financial - Value Purchase--Member"),
    (6536, "Financial - Money Transfer--Merchant"),
    (6537, "Financial - Money Transfer for a Purchase—Merchant"),
    (6538, "Financial - MoneySend Intracountry"),
    (6539, "Financial - MoneySend Funding"),
    (6540, "Financial - Stored Value Card Purchase/Load"),
    (7011, "Travel - Lodging - Hotels, Motels, Resorts"),
    (7032, "Recreation - Sporting and Recreational Camps"),
    (7033, "Recreation - Trailer Parks, Campgrounds"),
    (7210, "Services - Laundry, Cleaning, and Garment Services"),
    (7211, "Services - Laundry - Family and Commercial"),
    (7216, "Services - Dry Cleaners"),
    (7217, "Services - Carpet and Upholstery Cleaning"),
    (7221, "Services - Photographic Studios"),
    (7230, "Services - Beauty and Barber Shops"),
    (7251, "Services - Shoe Repair Shops"),
    (7261, "Services - Funeral Service and Crematories"),
    (7273, "Services - Dating and Escort Services"),
    (7276, "Services - Tax Preparation Services"),
    (7277, "Services - Counseling Services - Debt, Marriage"),
    (7278, "Services - Buying and Shopping Services, Clubs"),
    (7296, "Services - Clothing Rental"),
    (7297, "Services - Massage Parlors"),
    (7298, "Services - Health and Beauty Spas"),
    (7299, "Services - Miscellaneous Personal Services"),
    // Business services (7300-7999)
    (7311, "Business - Advertising Services"),
    (7321, "Business - Consumer Credit Reporting Agencies"),
    (7333, "Business - Commercial Photography, Art, and Graphics"),
    (7338, "Business - Quick Copy, Reproduction, and Blueprinting"),
    (7339, "Business - Stenographic and Secretarial Support"),
    (7342, "Business - Exterminating and Disinfecting Services"),
    (7349, "Business - Cleaning, Maintenance, and Janitorial Services"),
    (7361, "Business - Employment Agencies, Temporary Help Services"),
    (7372, "Business - Computer Programming and Data Processing"),
    (7375, "Business - Information Retrieval Services"),
    (7379, "Business - Computer Maintenance and Repair Services"),
    (7392, "Business - Management, Consulting, and Public Relations"),
    (7393, "Business - Detective Agencies, Protective Services"),
    (7394, "Business - Equipment, Tool, Furniture, and Appliance Rental"),
    (7395, "Business - Photofinishing Laboratories, Photo Developing"),
    (7399, "Business - Business Services, Not Elsewhere Classified"),
    (7512, "Business - Automobile Rental Agency"),
    (7513, "Business - Truck and Utility Trailer Rentals"),
    (7519, "Business - Motor Home and Recreational Vehicle Rentals"),
    (7523, "Business - Parking Lots and Garages"),
    (7531, "Business - Automotive Body Repair Shops"),
    (7534, "Business - Tire Retreading and Repair Shops"),
    (7535, "Business - Automotive Paint Shops"),
    (7538, "Business - Automotive Service Shops"),
    (7542, "Business - Car Washes"),
    (7549, "Business - Towing Services"),
    (7622, "Business - Electronics Repair Shops"),
    (7623, "Business - A/C and Refrigeration Repair"),
    (7629, "Business - Electrical and Small Appliance Repair"),
    (7631, "Business - Watch, Clock, and Jewelry Repair"),
    (7641, "Business - Furniture Reupholstery, Repair"),
    (7692, "Business - Welding Services"),
    (7699, "Business - Miscellaneous Repair Shops"),
    (7800, "Entertainment - Government-Owned Lotteries"),
    (7801, "Entertainment - Government-Licensed Casinos"),
    (7802, "Entertainment - Government-Licensed Horse/Dog Racing"),
    (7829, "Entertainment - Motion Picture and Video Tape Production"),
    (7832, "Entertainment - Motion Picture Theaters"),
    (7841, "Entertainment - Video Tape Rental Stores"),
    (7911, "Entertainment - Dance Halls, Studios, and Schools"),
    (7922, "Entertainment - Theatrical Producers and Ticket Agencies"),
    (7929, "Entertainment - Bands, Orchestras, and Entertainers"),
    (7932, "Entertainment - Billiard and Pool Establishments"),
    (7933, "Entertainment - Bowling Alleys"),
    (7941, "Entertainment - Commercial Sports, Athletic Fields"),
    (7991, "Entertainment - Tourist Attractions and Exhibits"),
    (7992, "Entertainment - Public Golf Courses"),
    (7993, "Entertainment - Video Amusement Game Supplies"),
    (7994, "Entertainment - Video Game Arcades/Establishments"),
    (7995, "Entertainment - Betting/Casino Gambling"),
    (7996, "Entertainment - Amusement Parks, Carnivals, Circuses"),
    (7997, "Entertainment - Membership Clubs (Sports, Recreation)"),
    (7998, "Entertainment - Aquariums, Seaquariums, Dolphinariums"),
    (7999, "Entertainment - Recreation Services (Not Elsewhere Classified)"),
    // Professional services (8000-8999)
    (8011, "Professional - Doctors and Physicians"),
    (8021, "Professional - Dentists and Orthodontists"),
    (8031, "Professional - Osteopathic Physicians"),
    (8041, "Professional - Chiropractors"),
    (8042, "Professional - Optometrists and Ophthalmologists"),
    (8043, "Professional - Optical Goods and Eyeglasses"),
    (8049, "Professional - Podiatrists and Chiropodists"),
    (8050, "Professional - Nursing and Personal Care Facilities"),
    (8062, "Professional - Hospitals"),
    (8071, "Professional - Medical and Dental Laboratories"),
    (8099, "Professional - Medical Services and Health Practitioners"),
    (8111, "Professional - Legal Services and Attorneys"),
    (8211, "Professional - Elementary and Secondary Schools"),
    (8220, "Professional - Colleges, Universities"),
    (8241, "Professional - Correspondence Schools"),
    (8244, "Professional - Business and Secretarial Schools"),
    (8249, "Professional - Trade and Vocational Schools"),
    (8299, "Professional - Educational Services"),
    (8351, "Professional - Child Care Services"),
    (8398, "Professional - Charitable and Social Service Organizations"),
    (8641, "Professional - Civic, Social, and Fraternal Associations"),
    (8651, "Professional - Political Organizations"),
    (8661, "Professional - Religious Organizations"),
    (8675, "Professional - Automobile Associations"),
    (8699, "Professional - Membership Organizations"),
    (8734, "Professional - Testing Laboratories"),
    (8911, "Professional - Architectural, Engineering, and Surveying Services"),
    (8931, "Professional - Accounting, Auditing, and Bookkeeping Services"),
    (8999, "Professional - Professional Services"),
    // Government services (9000-9999)
    (9211, "Government - Court Costs, Including Alimony and Child Support"),
    (9222, "Government - Fines"),
    (9223, "Government - Bail and Bond Payments"),
    (9311, "Government - Tax Payments"),
    (9399, "Government - Government Services"),
    (9402, "Government - Postal Services - Government Only"),
    (9405, "Government - Intra-Government Purchases - Government Only"),
    (9700, "Government - Automated Referral Service"),
    (9701, "Government - Visa Credential Service"),
    (9702, "Government - GCAS Emergency Services"),
    (9950, "Government - Intra-Company Purchases"),
];

/// Range-band label for codes without a specific entry
fn band_category(mcc: u32) -> Option<&'static str> {
    let label = match mcc {
        3000..=3299 => "Travel - Airlines",
        3300..=3499 => "Travel - Car Rental",
        3500..=3999 => "Travel - Lodging",
        4000..=4799 => "Travel - Transportation",
        4800..=4999 => "Utilities",
        5000..=5599 => "Retail",
        5600..=5699 => "Retail - Clothing",
        5700..=7299 => "Retail - Miscellaneous",
        7300..=7999 => "Business Services",
        8000..=8999 => "Professional Services",
        9000..=9999 => "Government",
        _ => return None,
    };
    Some(label)
}

/// Built-in MCC category table
///
/// Constructed once at startup; lookups are read-only thereafter, so the
/// table can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct MccCategoryTable {
    specific: HashMap<u32, &'static str>,
}

impl MccCategoryTable {
    /// Create the table from the built-in specific-code data
    pub fn new() -> Self {
        Self {
            specific: SPECIFIC_CATEGORIES.iter().copied().collect(),
        }
    }

    /// Number of specific-code entries
    pub fn len(&self) -> usize {
        self.specific.len()
    }

    /// Whether the specific-code table is empty
    pub fn is_empty(&self) -> bool {
        self.specific.is_empty()
    }
}

impl Default for MccCategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryResolver for MccCategoryTable {
    fn resolve(&self, mcc: u32) -> &str {
        self.specific
            .get(&mcc)
            .copied()
            .or_else(|| band_category(mcc))
            .unwrap_or(UNKNOWN_CATEGORY)
    }
}
